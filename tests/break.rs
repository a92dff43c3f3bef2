#[macro_use]
mod common;

#[cfg(test)]
mod _break {
    tests! {
        inside_while is OK
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
        inside_for is OK
        r#"
        for (var i = 0; i < 10; i = i + 1) {
            if (i == 3) break;
            print i;
        }
        "# => "0", "1", "2"
    }

    tests! {
        nested_break_only_exits_innermost_loop is OK
        r#"
        while (true) {
            while (true) {
                print "inside";
                break;
            }
            print "outside";
            break;
        }
        "# => "inside", "outside"
    }

    tests! {
        no_loop is ERR
        "break;"
        => "Cannot break outside of a loop"
    }
}
