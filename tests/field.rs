#[macro_use]
mod common;

#[cfg(test)]
mod field {
    tests! {
        on_instance is OK
        r#"
        class Foo {}
        var foo = Foo();
        foo.bar = "bar value";
        print foo.bar;
        "# => "bar value"
    }

    tests! {
        method_binds_this is OK
        r#"
        class Foo {
            init(n) { this.n = n; }
            getN() { return this.n; }
        }
        var foo = Foo(1);
        var getN = foo.getN;
        print getN();
        "# => "1"
    }

    tests! {
        undefined is ERR
        r#"
        class Foo {}
        var foo = Foo();
        print foo.bar;
        "# => "Undefined property 'bar'"
    }

    tests! {
        get_on_non_instance is ERR
        "var foo = 1; print foo.bar;"
        => "Only instances have properties"
    }

    tests! {
        set_on_non_instance is ERR
        "var foo = 1; foo.bar = 2;"
        => "Only instances have fields"
    }
}
