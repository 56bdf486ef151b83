use quadsum_stream::{Digest, InputSpec, OUTBYTES};

/// One result line for `name`.
///
/// Plain lines read `<hex>  <name>`. Tagged lines follow the BSD layout,
/// `BLAKE2b-<bits> (<name>) = <hex>`, dropping the bit suffix for full-length digests.
pub fn format_line(digest: &Digest, name: &InputSpec, tag: bool) -> String {
    if !tag {
        return format!("{digest}  {name}");
    }

    if digest.len() == OUTBYTES {
        format!("BLAKE2b ({name}) = {digest}")
    } else {
        format!("BLAKE2b-{} ({name}) = {digest}", digest.len() * 8)
    }
}
