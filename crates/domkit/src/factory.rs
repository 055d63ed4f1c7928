//! Element Factory

use domkit_dom::{Document, NodeId};

use crate::{Error, Result};

/// Build a detached `<tag>` with `attributes` applied in iteration order
/// and `text` as its content.
///
/// Names are not checked here; the document refuses illegal ones and that
/// error is returned as-is with the offending name attached.
pub fn create_element<I, K, V>(doc: &mut Document, tag: &str, attributes: I, text: &str) -> Result<NodeId>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let node = doc.create_element(tag).map_err(|source| Error::Tag {
        tag: tag.to_string(),
        source,
    })?;

    for (name, value) in attributes {
        let name = name.as_ref();
        doc.set_attribute(node, name, value.as_ref())
            .map_err(|source| Error::Attribute {
                name: name.to_string(),
                source,
            })?;
    }

    doc.set_text_content(node, text)?;
    Ok(node)
}
