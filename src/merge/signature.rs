use dto::signature::Signature;
use dto::template::Template;
use log::debug;

/// The signature named by the template, or `default_name` when the template names none.
/// A name matching no signature means no signature.
pub fn resolve_signature<'a>(
    template: &Template,
    signatures: &'a [Signature],
    default_name: &str,
) -> Option<&'a Signature> {
    let name = if template.signature().is_empty() {
        default_name
    } else {
        template.signature().as_str()
    };
    if name.is_empty() {
        return None;
    }

    let signature = signatures.iter().find(|signature| signature.name() == name);
    if signature.is_none() {
        debug!("Unknown signature `{name}`, sending without signature");
    }
    signature
}
