#[macro_use]
mod common;

#[cfg(test)]
mod regression {
    tests! {
        printing_a_class_shows_its_name is OK
        "class B {} print B;"
        => "<class B>"
    }

    tests! {
        function_returning_itself is OK
        r#"
        fun f() { return f; }
        print f();
        "# => "<function f>"
    }
}
