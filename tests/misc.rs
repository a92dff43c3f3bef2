#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file is OK
        ""
        =>
    }

    tests! {
        precedence is OK
        r#"
        print 2 + 3 * 4;
        print (2 + 3) * 4;
        print 10 - 2 - 3;
        "# => "14", "20", "5"
    }

    tests! {
        unexpected_character is ERR
        "print 1 | 2;"
        => "Unexpected character '|'"
    }
}
