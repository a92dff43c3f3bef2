#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line_at_eof is OK
        "print \"ok\"; // trailing comment"
        => "ok"
    }

    tests! {
        only_line_comment is OK
        "// nothing to see here"
        =>
    }

    tests! {
        block_comment is OK
        "/* block\n   comment */\nprint \"ok\";"
        => "ok"
    }

    tests! {
        unicode is OK
        "// 日本語のコメント\nprint \"ok\";"
        => "ok"
    }
}
