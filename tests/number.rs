#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals is OK
        r#"
        print 123;
        print 0;
        print 123.456;
        print -0.001;
        "# => "123", "0", "123.456", "-0.001"
    }

    tests! {
        divide_by_zero is ERR
        "print 1 / 0;"
        => "Can't divide by Zero"
    }

    tests! {
        trailing_dot is ERR
        "var a = 123.;"
        => "Unterminated number"
    }
}
