#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literals is OK
        r#"
        print "A string";
        print "";
        "# => "A string", ""
    }

    tests! {
        multiline is OK
        "var s = \"line one\nline two\"; print s;"
        => "line one\nline two"
    }

    tests! {
        concatenation is OK
        r#"print "foo" + "bar";"#
        => "foobar"
    }

    tests! {
        unterminated is ERR
        "var s = \"unterminated;"
        => "Unterminated string"
    }
}
