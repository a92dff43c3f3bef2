#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        arguments is OK
        r#"
        class Foo {
            init(a, b) {
                this.a = a;
                this.b = b;
            }
        }
        var foo = Foo(1, 2);
        print foo.a;
        print foo.b;
        "# => "1", "2"
    }

    tests! {
        early_return is OK
        r#"
        class Foo {
            init() {
                return;
            }
        }
        print Foo();
        "# => "<instance Foo>"
    }

    tests! {
        return_value is ERR
        r#"
        class Foo {
            init() {
                return "something";
            }
        }
        "# => "Cannot return a value from an initializer"
    }

    tests! {
        missing_arguments is ERR
        r#"
        class Foo {
            init(a, b) {}
        }
        Foo(1);
        "# => "Expected 2 arguments but got 1"
    }

    tests! {
        default_arguments is ERR
        r#"
        class Foo {}
        Foo(1, 2, 3);
        "# => "Expected 0 arguments but got 3"
    }
}
