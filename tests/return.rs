#[macro_use]
mod common;

#[cfg(test)]
mod _return {
    tests! {
        in_function is OK
        r#"
        fun f() {
            return "ok";
        }
        print f();
        "# => "ok"
    }

    tests! {
        in_method is OK
        r#"
        class Foo {
            bar() { return "ok"; }
        }
        print Foo().bar();
        "# => "ok"
    }

    tests! {
        return_nil_if_no_value is OK
        r#"
        fun f() {
            return;
        }
        print f();
        "# => "nil"
    }

    tests! {
        after_while is OK
        r#"
        fun f() {
            while (true) {
                return "ok";
            }
        }
        print f();
        "# => "ok"
    }

    tests! {
        at_top_level is ERR
        "return \"nope\";"
        => "Cannot return from top-level code"
    }
}
