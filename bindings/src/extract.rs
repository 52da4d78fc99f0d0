use crate::error::ConstructError;
use crate::value::{Shape, Value};

/// One positional argument after shape classification.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub value: &'a Value,
    pub shape: Option<Shape>,
}

/// Pulls up to `max_arity` positional slots out of `args` and classifies
/// each one.
///
/// Missing trailing arguments are legal (they select a shorter overload);
/// surplus arguments are not and fail with `InvalidArity`. No semantic
/// validation happens here.
pub fn extract<'a>(
    type_name: &str,
    args: &'a [Value],
    max_arity: usize,
) -> Result<Vec<Slot<'a>>, ConstructError> {
    if args.len() > max_arity {
        return Err(ConstructError::InvalidArity(format!(
            "{type_name}(): takes at most {max_arity} argument{}, got {}",
            if max_arity == 1 { "" } else { "s" },
            args.len()
        )));
    }
    Ok(args
        .iter()
        .map(|value| Slot {
            value,
            shape: value.shape(),
        })
        .collect())
}
