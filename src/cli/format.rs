//! Format output dispatch helpers

/// Dispatch output by format. The json branch returns a `Result`; the
/// human and records branches are blocks that print and cannot fail.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&value) },
///     human => { println!("done"); },
///     records => { println!("H skillbot=1 records=1 mode=init"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
