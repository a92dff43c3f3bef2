#[macro_use]
mod common;

#[cfg(test)]
mod class {
    tests! {
        print_class is OK
        "class Foo {} print Foo;"
        => "<class Foo>"
    }

    tests! {
        inherit_self is ERR
        "class Foo < Foo {}"
        => "A class cannot inherit from itself"
    }

    tests! {
        reference_self is OK
        r#"
        class Foo {
            getSelf() {
                return Foo;
            }
        }
        print Foo().getSelf();
        "# => "<class Foo>"
    }

    tests! {
        local_inherit_self is ERR
        "{ class Foo < Foo {} }"
        => "A class cannot inherit from itself"
    }
}
