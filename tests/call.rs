#[macro_use]
mod common;

#[cfg(test)]
mod call {
    tests! {
        bool is ERR
        "true();"
        => "Cannot call a value of type 'bool'"
    }

    tests! {
        nil is ERR
        "nil();"
        => "Cannot call a value of type 'nil'"
    }

    tests! {
        num is ERR
        "123();"
        => "Cannot call a value of type 'number'"
    }

    tests! {
        string is ERR
        "\"str\"();"
        => "Cannot call a value of type 'string'"
    }

    tests! {
        instance is ERR
        r#"
        class Foo {}
        var foo = Foo();
        foo();
        "# => "Cannot call a value of type 'instance'"
    }
}
