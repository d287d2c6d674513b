use crate::{new_parser_error, Result, Rule};
use pest::iterators::Pair;

/// Parses an `int` pair into a 64-bit value.
///
/// Literals only have to fit in 64 bits here; reduction to the
/// destination field width (16-bit immediate, 5-bit shamt) happens by
/// masking at encode time.
pub fn process_int(pair: Pair<Rule>) -> Result<i64> {
    let inner = pair.into_inner().next().unwrap();

    let (digits, radix) = match inner.as_rule() {
        Rule::hex_uint => (inner.into_inner().next().unwrap(), 16),
        Rule::bin_uint => (inner.into_inner().next().unwrap(), 2),
        Rule::dec_int => (inner, 10),
        _ => unreachable!(),
    };

    let span = digits.as_span();
    i64::from_str_radix(span.as_str(), radix)
        .map_err(|err| new_parser_error(span, format!("Parsing integer failed: {}", err)))
}
