#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        constructor is OK
        r#"
        class Base {
            init(value) {
                this.value = value;
            }
        }
        class Derived < Base {}
        var d = Derived("value");
        print d.value;
        "# => "value"
    }

    tests! {
        inherit_methods is OK
        r#"
        class Base {
            greet() { return "base"; }
        }
        class Derived < Base {}
        print Derived().greet();
        "# => "base"
    }

    tests! {
        override_and_call_super is OK
        r#"
        class Base {
            greet() { return "base"; }
        }
        class Derived < Base {
            greet() { return super.greet() + " derived"; }
        }
        print Derived().greet();
        "# => "base derived"
    }

    tests! {
        inherit_from_non_class is ERR
        r#"
        var NotAClass = "hi";
        class Foo < NotAClass {}
        "# => "Superclass must be a class"
    }
}
