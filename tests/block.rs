#[macro_use]
mod common;

#[cfg(test)]
mod block {
    tests! {
        empty is OK
        r#"
        { }
        print "ok";
        "# => "ok"
    }

    tests! {
        scope is OK
        r#"
        var a = "outer";
        {
            var a = "inner";
            print a;
        }
        print a;
        "# => "inner", "outer"
    }
}
