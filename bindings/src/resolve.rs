use crate::error::ConstructError;
use crate::extract::Slot;
use crate::value::Shape;

/// One admissible constructor form: the expected shape of each positional
/// parameter, in order. The slice length is the form's arity.
pub type Variant = &'static [Shape];

/// Finds the first variant whose arity and per-slot shapes match the
/// supplied slots exactly.
///
/// Variants are tried in declaration order and the first full match wins.
/// Tables must not contain two variants with the same (arity, shapes) key,
/// so the scan is deterministic.
///
/// Error distinction:
/// - no variant has this arity at all -> `InvalidArity`;
/// - an arity matches but some slot's classification does not ->
///   `InvalidArgumentType`.
pub fn resolve(
    type_name: &str,
    variants: &[Variant],
    slots: &[Slot],
) -> Result<usize, ConstructError> {
    let mut arity_exists = false;
    for (idx, variant) in variants.iter().enumerate() {
        if variant.len() != slots.len() {
            continue;
        }
        arity_exists = true;
        let matched = variant
            .iter()
            .zip(slots)
            .all(|(want, slot)| slot.shape == Some(*want));
        if matched {
            return Ok(idx);
        }
    }

    if !arity_exists {
        return Err(ConstructError::InvalidArity(format!(
            "{type_name}(): no constructor takes {} argument{}; expects one of {}",
            slots.len(),
            if slots.len() == 1 { "" } else { "s" },
            render_forms(type_name, variants)
        )));
    }

    Err(ConstructError::InvalidArgumentType(format!(
        "{type_name}(): invalid argument types ({}); expects one of {}",
        render_supplied(slots),
        render_forms(type_name, variants)
    )))
}

/// Renders every valid constructor form, e.g.
/// `Instruction(), Instruction(bytes), Instruction(int, bytes)`.
fn render_forms(type_name: &str, variants: &[Variant]) -> String {
    let forms: Vec<String> = variants
        .iter()
        .map(|variant| {
            let params: Vec<&str> = variant.iter().map(|shape| shape.name()).collect();
            format!("{type_name}({})", params.join(", "))
        })
        .collect();
    forms.join(", ")
}

/// Renders what the caller actually supplied, by dynamic type name.
fn render_supplied(slots: &[Slot]) -> String {
    let names: Vec<&str> = slots.iter().map(|slot| slot.value.type_name()).collect();
    names.join(", ")
}
