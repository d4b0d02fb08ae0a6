use crate::{
    errors::{CryptError, InitError},
    overlap::inexact_overlap,
    StageCipher,
};
use cipher::{generic_array::GenericArray, Block, BlockDecrypt, BlockEncrypt, InvalidLength};
use core::ops::Range;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Chaining state shared by [`Encrypt`][crate::Encrypt] and
/// [`Decrypt`][crate::Decrypt].
#[derive(Clone)]
pub(crate) struct Cbc3State<C1: StageCipher, C2: StageCipher, C3: StageCipher> {
    c1: C1,
    c2: C2,
    c3: C3,
    registers: [Block<C1>; 3],
    scratch: Block<C1>,
}

impl<C1, C2, C3> Cbc3State<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    pub(crate) fn new(c1: C1, c2: C2, c3: C3, iv: &[u8]) -> Result<Self, InitError> {
        let bs = C1::block_size();
        if bs != C2::block_size() || bs != C3::block_size() {
            return Err(InitError::BlockSizeMismatch);
        }
        let mut state = Self {
            c1,
            c2,
            c3,
            registers: Default::default(),
            scratch: Default::default(),
        };
        state.set_iv(iv).map_err(|_| InitError::InvalidIvLength)?;
        Ok(state)
    }

    #[inline]
    pub(crate) fn block_size(&self) -> usize {
        C1::block_size()
    }

    pub(crate) fn set_iv(&mut self, iv: &[u8]) -> Result<(), InvalidLength> {
        let bs = self.block_size();
        if iv.len() != 3 * bs {
            return Err(InvalidLength);
        }
        for (r, chunk) in self.registers.iter_mut().zip(iv.chunks_exact(bs)) {
            r.copy_from_slice(chunk);
        }
        Ok(())
    }

    pub(crate) fn iv_state(&self) -> [Block<C1>; 3] {
        self.registers.clone()
    }

    /// Three passes of CBC over one block in place, the middle one inverted.
    pub(crate) fn encrypt_block(&mut self, block: &mut [u8]) {
        let Self {
            c1,
            c2,
            c3,
            registers: [r0, r1, r2],
            ..
        } = self;

        xor(block, r0);
        c1.encrypt_block(GenericArray::from_mut_slice(block));
        r0.copy_from_slice(block);

        c2.decrypt_block(GenericArray::from_mut_slice(block));
        xor(block, r1);
        r1.copy_from_slice(r0);

        xor(block, r2);
        c3.encrypt_block(GenericArray::from_mut_slice(block));
        r2.copy_from_slice(block);
    }

    /// Inverse of [`Self::encrypt_block`]. `r2` chains on the ciphertext
    /// block itself, so it is kept in scratch before the block is
    /// overwritten.
    pub(crate) fn decrypt_block(&mut self, block: &mut [u8]) {
        let Self {
            c1,
            c2,
            c3,
            registers: [r0, r1, r2],
            scratch,
        } = self;

        scratch.copy_from_slice(block);
        c3.decrypt_block(GenericArray::from_mut_slice(block));
        xor(block, r2);
        r2.copy_from_slice(scratch);

        xor(block, r1);
        c2.encrypt_block(GenericArray::from_mut_slice(block));
        r1.copy_from_slice(block);

        c1.decrypt_block(GenericArray::from_mut_slice(block));
        xor(block, r0);
        r0.copy_from_slice(r1);
    }

    fn check_lengths(&self, dst_len: usize, src_len: usize) -> Result<(), CryptError> {
        if src_len % self.block_size() != 0 {
            return Err(CryptError::NotFullBlocks);
        }
        if dst_len < src_len {
            return Err(CryptError::OutputTooSmall);
        }
        Ok(())
    }

    pub(crate) fn crypt_blocks(
        &mut self,
        dst: &mut [u8],
        src: &[u8],
        mut f: impl FnMut(&mut Self, &mut [u8]),
    ) -> Result<(), CryptError> {
        self.check_lengths(dst.len(), src.len())?;
        let bs = self.block_size();
        for (out, inp) in dst.chunks_exact_mut(bs).zip(src.chunks_exact(bs)) {
            out.copy_from_slice(inp);
            f(self, out);
        }
        Ok(())
    }

    pub(crate) fn crypt_blocks_in_place(
        &mut self,
        buf: &mut [u8],
        mut f: impl FnMut(&mut Self, &mut [u8]),
    ) -> Result<(), CryptError> {
        self.check_lengths(buf.len(), buf.len())?;
        for block in buf.chunks_exact_mut(self.block_size()) {
            f(self, block);
        }
        Ok(())
    }

    /// Processes `buf[src]` into `buf[dst..dst + src.len()]`.
    pub(crate) fn crypt_blocks_within(
        &mut self,
        buf: &mut [u8],
        src: Range<usize>,
        dst: usize,
        f: impl FnMut(&mut Self, &mut [u8]),
    ) -> Result<(), CryptError> {
        if src.start > src.end || src.end > buf.len() {
            return Err(CryptError::InvalidRange);
        }
        let len = src.len();
        if len % self.block_size() != 0 {
            return Err(CryptError::NotFullBlocks);
        }
        let dst = match dst.checked_add(len) {
            Some(end) if end <= buf.len() => dst..end,
            _ => return Err(CryptError::OutputTooSmall),
        };
        if inexact_overlap(&dst, &src) {
            return Err(CryptError::InvalidOverlap);
        }

        if dst.start == src.start {
            self.crypt_blocks_in_place(&mut buf[src], f)
        } else if dst.start >= src.end {
            let (head, tail) = buf.split_at_mut(dst.start);
            self.crypt_blocks(&mut tail[..len], &head[src], f)
        } else {
            let (head, tail) = buf.split_at_mut(src.start);
            self.crypt_blocks(&mut head[dst], &tail[..len], f)
        }
    }
}

#[cfg(feature = "zeroize")]
impl<C1, C2, C3> Drop for Cbc3State<C1, C2, C3>
where
    C1: StageCipher,
    C2: StageCipher,
    C3: StageCipher,
{
    fn drop(&mut self) {
        for r in self.registers.iter_mut() {
            r.as_mut_slice().zeroize();
        }
        self.scratch.as_mut_slice().zeroize();
    }
}

#[inline(always)]
fn xor(out: &mut [u8], buf: &[u8]) {
    for (a, b) in out.iter_mut().zip(buf) {
        *a ^= *b;
    }
}
