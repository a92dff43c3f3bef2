#[macro_use]
mod common;

#[cfg(test)]
mod _while {
    tests! {
        basic_loop is OK
        r#"
        var i = 0;
        while (i < 3) {
            print i;
            i = i + 1;
        }
        "# => "0", "1", "2"
    }

    tests! {
        break_inside is OK
        r#"
        var i = 0;
        while (true) {
            if (i == 3) break;
            print i;
            i = i + 1;
        }
        "# => "0", "1", "2"
    }

    tests! {
        class_in_body is ERR
        "while (true) class Foo {}"
        => "Expected expression"
    }
}
