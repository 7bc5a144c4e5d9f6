//! Minimal DER construction for wrapping PKCS#1 keys into PKCS#8.
//!
//! This is deliberately not a general ASN.1 encoder. It emits exactly the
//! fields needed to build one `PrivateKeyInfo` structure around an existing
//! `RSAPrivateKey` blob:
//!
//! ```text
//! SEQUENCE(
//!   INTEGER 0,
//!   SEQUENCE( OID rsaEncryption, NULL ),
//!   OCTET STRING( <pkcs1 bytes> ),
//! )
//! ```
//!
//! Supported lengths top out at 65535 bytes, far above any real RSA key.

/// rsaEncryption, per RFC 8017.
const RSA_ENCRYPTION_OID: &[u64] = &[1, 2, 840, 113549, 1, 1, 1];

/// Wrap a raw PKCS#1 `RSAPrivateKey` DER blob into a PKCS#8 `PrivateKeyInfo`.
pub(crate) fn wrap_pkcs1_in_pkcs8(pkcs1: &[u8]) -> Vec<u8> {
    let algorithm = sequence(&[oid(RSA_ENCRYPTION_OID), null()]);
    sequence(&[integer(0), algorithm, octet_string(pkcs1)])
}

fn sequence(parts: &[Vec<u8>]) -> Vec<u8> {
    tlv(0x30, &parts.concat())
}

/// Non-negative single-byte integers only; all the wrapper needs is the
/// PKCS#8 version field.
fn integer(value: u8) -> Vec<u8> {
    vec![0x02, 0x01, value]
}

fn null() -> Vec<u8> {
    vec![0x05, 0x00]
}

fn octet_string(data: &[u8]) -> Vec<u8> {
    tlv(0x04, data)
}

/// Encode an object identifier. The first two arcs are combined as
/// `arc0 * 40 + arc1`; remaining arcs use base-128 with continuation bits.
fn oid(arcs: &[u64]) -> Vec<u8> {
    debug_assert!(arcs.len() >= 2, "OID needs at least two arcs");

    let mut body = vec![(arcs[0] * 40 + arcs[1]) as u8];
    for &arc in &arcs[2..] {
        encode_base128(&mut body, arc);
    }
    tlv(0x06, &body)
}

fn tlv(tag: u8, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + body.len());
    out.push(tag);
    encode_length(&mut out, body.len());
    out.extend_from_slice(body);
    out
}

/// Definite-form DER length: short form below 128, `0x81` + one byte up to
/// 255, `0x82` + two bytes big-endian up to 65535.
fn encode_length(out: &mut Vec<u8>, len: usize) {
    debug_assert!(len < 65536, "DER length {len} exceeds supported range");

    if len < 128 {
        out.push(len as u8);
    } else if len < 256 {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
}

fn encode_base128(out: &mut Vec<u8>, value: u64) {
    let mut buf = [0u8; 10];
    let mut pos = buf.len();
    let mut v = value;

    pos -= 1;
    buf[pos] = (v & 0x7f) as u8;
    v >>= 7;

    while v > 0 {
        pos -= 1;
        buf[pos] = ((v & 0x7f) | 0x80) as u8;
        v >>= 7;
    }

    out.extend_from_slice(&buf[pos..]);
}
