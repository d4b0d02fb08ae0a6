//! Triple Cipher Block Chaining (CBC3) mode, also known as inner-CBC
//! triple encryption.
//!
//! Every block passes through three block ciphers in sequence, with the
//! middle pass inverted (encrypt, decrypt, encrypt), and each of the three
//! passes is chained through its own feedback register. This is the
//! construction SSH-1 uses for `3des`, so three IVs are needed, one per
//! stage, passed together as a single IV of three blocks.
//!
//! The three stage ciphers do not need to be of the same type, but they must
//! share one block size, and decryption must use them in the same order as
//! encryption.
//!
//! This mode applies no padding and provides no integrity: ciphertexts must
//! be authenticated separately before being decrypted.
//!
//! # Example
//! ```
//! use cbc3::cipher::KeyInit;
//! use des::Des;
//! use hex_literal::hex;
//! use sha2::{Digest, Sha224};
//!
//! let key = Sha224::digest(b"testit");
//! let c1 = Des::new_from_slice(&key[..8]).unwrap();
//! let c2 = Des::new_from_slice(&key[8..16]).unwrap();
//! let c3 = Des::new_from_slice(&key[16..24]).unwrap();
//!
//! // the IV is commonly sent in front of the ciphertext
//! let msg = hex!("
//!     da87200e69c4d5af38720c036849c79a4e3561a32e34613a
//!     d04633e7a048a80d0db32b1c6c3ba72e
//! ");
//! let (iv, ciphertext) = msg.split_at(24);
//!
//! let mut buf = [0u8; 16];
//! buf.copy_from_slice(ciphertext);
//! let mut dec = cbc3::Decrypt::new(c1.clone(), c2.clone(), c3.clone(), iv).unwrap();
//! dec.crypt_blocks_in_place(&mut buf).unwrap();
//! assert_eq!(&buf, b"exampleplaintext");
//!
//! let mut enc = cbc3::Encrypt::new(c1, c2, c3, iv).unwrap();
//! let mut out = [0u8; 16];
//! enc.crypt_blocks(&mut out, b"exampleplaintext").unwrap();
//! assert_eq!(&out[..], ciphertext);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use cipher;

mod errors;
mod overlap;
mod state;

pub use errors::{CryptError, InitError};

use cipher::{
    consts::U1, inout::InOut, Block, BlockBackend, BlockCipher, BlockClosure, BlockDecrypt,
    BlockDecryptMut, BlockEncrypt, BlockEncryptMut, BlockSizeUser, InvalidLength,
    ParBlocksSizeUser,
};
use core::{fmt, ops::Range};
use state::Cbc3State;

#[cfg(feature = "zeroize")]
use zeroize::ZeroizeOnDrop;

/// Block cipher usable as one CBC3 stage: a fixed block size and in-place
/// encryption and decryption of a single block.
///
/// Implemented for every RustCrypto block cipher.
pub trait StageCipher: BlockCipher + BlockEncrypt + BlockDecrypt {}

impl<C: BlockCipher + BlockEncrypt + BlockDecrypt> StageCipher for C {}

/// CBC3 mode encryptor.
#[derive(Clone)]
pub struct Encrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    state: Cbc3State<C1, C2, C3>,
}

impl<C1, C2, C3> Encrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    /// Create an encryptor from three stage ciphers and an IV of three
    /// blocks, one per stage. The IV is copied.
    ///
    /// Using a different IV for each stage is recommended.
    pub fn new(c1: C1, c2: C2, c3: C3, iv: &[u8]) -> Result<Self, InitError> {
        Cbc3State::new(c1, c2, c3, iv).map(|state| Self { state })
    }

    /// Block size shared by the three stage ciphers.
    pub fn block_size(&self) -> usize {
        self.state.block_size()
    }

    /// Encrypt whole blocks of `src` into the front of `dst`.
    ///
    /// The chain continues across calls.
    pub fn crypt_blocks(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptError> {
        self.state.crypt_blocks(dst, src, Cbc3State::encrypt_block)
    }

    /// Encrypt whole blocks of `buf` in place.
    pub fn crypt_blocks_in_place(&mut self, buf: &mut [u8]) -> Result<(), CryptError> {
        self.state.crypt_blocks_in_place(buf, Cbc3State::encrypt_block)
    }

    /// Encrypt `buf[src]` into `buf` starting at offset `dst`.
    ///
    /// The two regions must either start at the same offset or be disjoint,
    /// otherwise [`CryptError::InvalidOverlap`] is returned and `buf` is left
    /// untouched.
    pub fn crypt_blocks_within(
        &mut self,
        buf: &mut [u8],
        src: Range<usize>,
        dst: usize,
    ) -> Result<(), CryptError> {
        self.state
            .crypt_blocks_within(buf, src, dst, Cbc3State::encrypt_block)
    }

    /// Restart the chain from a new IV of three blocks.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), InvalidLength> {
        self.state.set_iv(iv)
    }

    /// Current feedback registers, one block per stage.
    ///
    /// Their concatenation passed to [`Self::set_iv`] resumes the chain.
    pub fn iv_state(&self) -> [Block<C1>; 3] {
        self.state.iv_state()
    }
}

impl<C1, C2, C3> BlockSizeUser for Encrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    type BlockSize = C1::BlockSize;
}

impl<C1, C2, C3> BlockEncryptMut for Encrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    fn encrypt_with_backend_mut(&mut self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut EncryptBackend(&mut self.state))
    }
}

impl<C1, C2, C3> fmt::Debug for Encrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cbc3::Encrypt { ... }")
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<C1, C2, C3> ZeroizeOnDrop for Encrypt<C1, C2, C3>
where
    C1: StageCipher + ZeroizeOnDrop,
    C2: StageCipher + ZeroizeOnDrop,
    C3: StageCipher + ZeroizeOnDrop,
{
}

/// CBC3 mode decryptor.
#[derive(Clone)]
pub struct Decrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    state: Cbc3State<C1, C2, C3>,
}

impl<C1, C2, C3> Decrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    /// Create a decryptor from three stage ciphers and an IV of three
    /// blocks. Ciphers and IV must match the ones used for encryption.
    pub fn new(c1: C1, c2: C2, c3: C3, iv: &[u8]) -> Result<Self, InitError> {
        Cbc3State::new(c1, c2, c3, iv).map(|state| Self { state })
    }

    /// Block size shared by the three stage ciphers.
    pub fn block_size(&self) -> usize {
        self.state.block_size()
    }

    /// Decrypt whole blocks of `src` into the front of `dst`.
    pub fn crypt_blocks(&mut self, dst: &mut [u8], src: &[u8]) -> Result<(), CryptError> {
        self.state.crypt_blocks(dst, src, Cbc3State::decrypt_block)
    }

    /// Decrypt whole blocks of `buf` in place.
    pub fn crypt_blocks_in_place(&mut self, buf: &mut [u8]) -> Result<(), CryptError> {
        self.state.crypt_blocks_in_place(buf, Cbc3State::decrypt_block)
    }

    /// Decrypt `buf[src]` into `buf` starting at offset `dst`.
    ///
    /// See [`Encrypt::crypt_blocks_within`] for the overlap rules.
    pub fn crypt_blocks_within(
        &mut self,
        buf: &mut [u8],
        src: Range<usize>,
        dst: usize,
    ) -> Result<(), CryptError> {
        self.state
            .crypt_blocks_within(buf, src, dst, Cbc3State::decrypt_block)
    }

    /// Restart the chain from a new IV of three blocks.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), InvalidLength> {
        self.state.set_iv(iv)
    }

    /// Current feedback registers, one block per stage.
    pub fn iv_state(&self) -> [Block<C1>; 3] {
        self.state.iv_state()
    }
}

impl<C1, C2, C3> BlockSizeUser for Decrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    type BlockSize = C1::BlockSize;
}

impl<C1, C2, C3> BlockDecryptMut for Decrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    fn decrypt_with_backend_mut(&mut self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut DecryptBackend(&mut self.state))
    }
}

impl<C1, C2, C3> fmt::Debug for Decrypt<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cbc3::Decrypt { ... }")
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<C1, C2, C3> ZeroizeOnDrop for Decrypt<C1, C2, C3>
where
    C1: StageCipher + ZeroizeOnDrop,
    C2: StageCipher + ZeroizeOnDrop,
    C3: StageCipher + ZeroizeOnDrop,
{
}

struct EncryptBackend<'a, C1, C2, C3>(&'a mut Cbc3State<C1, C2, C3>)
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher;

impl<C1, C2, C3> BlockSizeUser for EncryptBackend<'_, C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    type BlockSize = C1::BlockSize;
}

impl<C1, C2, C3> ParBlocksSizeUser for EncryptBackend<'_, C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    type ParBlocksSize = U1;
}

impl<C1, C2, C3> BlockBackend for EncryptBackend<'_, C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut t = block.get_in().clone();
        self.0.encrypt_block(&mut t);
        *block.get_out() = t;
    }
}

struct DecryptBackend<'a, C1, C2, C3>(&'a mut Cbc3State<C1, C2, C3>)
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher;

impl<C1, C2, C3> BlockSizeUser for DecryptBackend<'_, C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    type BlockSize = C1::BlockSize;
}

impl<C1, C2, C3> ParBlocksSizeUser for DecryptBackend<'_, C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    type ParBlocksSize = U1;
}

impl<C1, C2, C3> BlockBackend for DecryptBackend<'_, C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    #[inline(always)]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut t = block.get_in().clone();
        self.0.decrypt_block(&mut t);
        *block.get_out() = t;
    }
}
