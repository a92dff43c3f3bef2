#[macro_use]
mod common;

#[cfg(test)]
mod bool {
    tests! {
        equality is OK
        r#"
        print true == true;
        print true == false;
        print false == true;
        print false == false;
        "# => "true", "false", "false", "true"
    }

    tests! {
        not is OK
        r#"
        print !true;
        print !false;
        print !!true;
        "# => "false", "true", "true"
    }
}
