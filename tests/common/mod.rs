/// Runs `$source` against a fresh interpreter and asserts on what it
/// printed (`OK`) or on a diagnostic it reported (`ERR`). Mirrors the
/// shape of a fixture-file test harness, but keeps the source inline
/// since a source program is cheaper to read in place than to cross-
/// reference against a file elsewhere in the tree.
#[macro_export]
macro_rules! tests {
    ($name:ident is OK $source:expr => $($expected:expr),* $(,)?) => {
        #[test]
        fn $name() {
            use loxi::error::RecordingReporter;
            use loxi::Lox;

            let mut lox = Lox::new();
            let mut reporter = RecordingReporter::new();
            lox.run_line($source, &mut reporter);

            let expected: Vec<&str> = vec![$($expected),*];
            assert_eq!(reporter.prints, expected, "diagnostics: {:?}", reporter.diagnostics);
            assert!(!reporter.had_error(), "unexpected compile error: {:?}", reporter.diagnostics);
            assert!(!reporter.had_runtime_error(), "unexpected runtime error: {:?}", reporter.diagnostics);
        }
    };

    ($name:ident is ERR $source:expr => $expected:expr) => {
        #[test]
        fn $name() {
            use loxi::error::RecordingReporter;
            use loxi::Lox;

            let mut lox = Lox::new();
            let mut reporter = RecordingReporter::new();
            lox.run_line($source, &mut reporter);

            assert!(reporter.had_error() || reporter.had_runtime_error(), "expected an error, prints: {:?}", reporter.prints);
            assert!(
                reporter.diagnostics.iter().any(|d| d.contains($expected)),
                "expected a diagnostic containing {:?}, got: {:?}",
                $expected,
                reporter.diagnostics
            );
        }
    };
}
