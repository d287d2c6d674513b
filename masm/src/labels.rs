use crate::{new_parser_error, Result, Rule};
use pest::iterators::Pair;
use std::collections::HashMap;

/// Label name to instruction index, collected in the first pass.
pub type LabelMap<'i> = HashMap<&'i str, u32>;

/// Processes one `statement` pair: records its leading label, if any,
/// under the given instruction index and forwards the instruction, if
/// any, to `op`.
///
/// Labels are unique per program; defining one twice is an error.
pub fn process_statement<'i, F>(
    pair: Pair<'i, Rule>,
    labels: &mut LabelMap<'i>,
    index: u32,
    op: F,
) -> Result<()>
where
    F: FnOnce(Pair<'i, Rule>) -> Result<()>,
{
    let mut pairs = pair.into_inner().peekable();

    if pairs
        .peek()
        .map(|first| first.as_rule() == Rule::label)
        .unwrap_or(false)
    {
        let label = pairs.next().unwrap();
        let span = label.into_inner().next().unwrap().as_span();
        let name = span.as_str();

        if labels.insert(name, index).is_some() {
            return Err(new_parser_error(
                span,
                format!("Duplicate label \"{}\"", name),
            ));
        }
    }

    if let Some(instruction) = pairs.next() {
        op(instruction)?;
    }

    Ok(())
}
