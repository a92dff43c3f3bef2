#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        sums_the_range is OK
        r#"
        var sum = 0;
        for (var i = 0; i < 5; i = i + 1) {
            sum = sum + i;
        }
        print sum;
        "# => "10"
    }

    tests! {
        break_inside is OK
        r#"
        for (var i = 0; i < 10; i = i + 1) {
            if (i == 3) break;
            print i;
        }
        "# => "0", "1", "2"
    }

    tests! {
        class_in_body is ERR
        "for (var i = 0; i < 1; i = i + 1) class Foo {}"
        => "Expected expression"
    }

    tests! {
        fun_in_body is ERR
        "for (var i = 0; i < 1; i = i + 1) fun foo() {}"
        => "Expected expression"
    }
}
