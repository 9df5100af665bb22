//! Tool secret encryption
//!
//! Secrets are stored as four `:`-separated fields:
//!
//! ```text
//! <iv hex>:<ciphertext hex>:<tag hex>:AES/CBC/PKCS5Padding
//! ```
//!
//! The payload is AES-256-CBC with PKCS#7 padding (identical to PKCS5 for a
//! 16 byte block). The cipher key is SHA-256 of the server key; the tag is
//! HMAC-SHA256 over `iv || ciphertext` under a separately derived key, and is
//! checked before any decryption is attempted.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::{CryptoError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Cipher label carried in the last field
pub const CIPHER_LABEL: &str = "AES/CBC/PKCS5Padding";

const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;
const TAG_LEN: usize = 32;

/// Domain separation for the MAC key
const MAC_KEY_CONTEXT: &[u8] = b"ltigate.secret.mac.v1\0";

/// Encrypts `plain` under `key`
///
/// Input that already has the ciphertext shape is returned unchanged, so
/// calling this on a stored value never double-encrypts it.
pub fn encrypt_secret(plain: &str, key: &str) -> Result<String> {
    if is_encrypted(plain) {
        if try_decrypt_secret(plain, key).is_err() {
            warn!("Secret is already encrypted under a different key; leaving it unchanged");
        }
        return Ok(plain.to_string());
    }

    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new_from_slices(&cipher_key(key), &iv)?
        .encrypt_padded_vec_mut::<Pkcs7>(plain.as_bytes());
    let tag = tag_mac(key, &iv, &ciphertext)?.finalize().into_bytes();

    Ok(format!(
        "{}:{}:{}:{}",
        hex::encode(iv),
        hex::encode(&ciphertext),
        hex::encode(tag),
        CIPHER_LABEL
    ))
}

/// Decrypts a stored secret, or `None` if it is malformed or the key is wrong
pub fn decrypt_secret(encrypted: &str, key: &str) -> Option<String> {
    match try_decrypt_secret(encrypted, key) {
        Ok(plain) => Some(plain),
        Err(error) => {
            debug!(%error, "Secret decryption failed");
            None
        }
    }
}

/// Decrypts a stored secret, reporting why it failed
pub fn try_decrypt_secret(encrypted: &str, key: &str) -> Result<String> {
    let fields: Vec<&str> = encrypted.split(':').collect();
    let [iv, ciphertext, tag, label] = fields.as_slice() else {
        return Err(CryptoError::MalformedCiphertext(format!(
            "expected 4 fields, found {}",
            fields.len()
        )));
    };

    if *label != CIPHER_LABEL {
        return Err(CryptoError::UnsupportedCipher(label.to_string()));
    }

    let iv = hex::decode(iv)?;
    let ciphertext = hex::decode(ciphertext)?;
    let tag = hex::decode(tag)?;

    if iv.len() != IV_LEN {
        return Err(CryptoError::MalformedCiphertext(format!("IV is {} bytes", iv.len())));
    }
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::MalformedCiphertext(format!(
            "payload is {} bytes",
            ciphertext.len()
        )));
    }

    tag_mac(key, &iv, &ciphertext)?
        .verify_slice(&tag)
        .map_err(|_| CryptoError::IntegrityCheckFailed)?;

    let plain = Aes256CbcDec::new_from_slices(&cipher_key(key), &iv)?
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|e| CryptoError::Decryption(e.to_string()))?;

    Ok(String::from_utf8(plain)?)
}

/// Whether `value` has the shape of an encrypted secret
///
/// Structural only; says nothing about which key it was encrypted under.
pub fn is_encrypted(value: &str) -> bool {
    let fields: Vec<&str> = value.split(':').collect();
    let [iv, ciphertext, tag, label] = fields.as_slice() else {
        return false;
    };

    *label == CIPHER_LABEL
        && is_hex(iv, IV_LEN)
        && is_hex(tag, TAG_LEN)
        && !ciphertext.is_empty()
        && ciphertext.len() % (BLOCK_LEN * 2) == 0
        && ciphertext.bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_hex(field: &str, bytes: usize) -> bool {
    field.len() == bytes * 2 && field.bytes().all(|b| b.is_ascii_hexdigit())
}

fn cipher_key(key: &str) -> [u8; 32] {
    Sha256::digest(key.as_bytes()).into()
}

fn tag_mac(key: &str, iv: &[u8], ciphertext: &[u8]) -> Result<HmacSha256> {
    let mac_key = Sha256::new()
        .chain_update(MAC_KEY_CONTEXT)
        .chain_update(key.as_bytes())
        .finalize();

    let mut mac = <HmacSha256 as Mac>::new_from_slice(&mac_key)?;
    mac.update(iv);
    mac.update(ciphertext);
    Ok(mac)
}
