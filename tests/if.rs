#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        basic_flow is OK
        r#"
        if (true) print "then"; else print "else";
        if (false) print "then"; else print "else";
        "# => "then", "else"
    }

    tests! {
        truthiness is OK
        r#"
        if (false) print "yes"; else print "no";
        if (nil) print "yes"; else print "no";
        if (true) print "yes"; else print "no";
        if (0) print "yes"; else print "no";
        if ("") print "yes"; else print "no";
        "# => "no", "no", "yes", "no", "yes"
    }

    tests! {
        dangling_else is OK
        r#"
        if (true) if (false) print "bad"; else print "good";
        "# => "good"
    }

    tests! {
        class_in_then is ERR
        "if (true) class Foo {}"
        => "Expected expression"
    }
}
