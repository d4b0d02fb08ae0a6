//! CBC3 throughput over DES and AES-128 stages.
#![feature(test)]
extern crate test;

use aes::Aes128;
use cbc3::cipher::KeyInit;
use cbc3::{Decrypt, Encrypt};
use des::Des;
use test::Bencher;

const KEY: [u8; 32] = [0x42; 32];
const DATA_LEN: usize = 16 * 1024;

fn des_stages() -> (Des, Des, Des) {
    (
        Des::new_from_slice(&KEY[..8]).unwrap(),
        Des::new_from_slice(&KEY[8..16]).unwrap(),
        Des::new_from_slice(&KEY[16..24]).unwrap(),
    )
}

fn aes_stage() -> Aes128 {
    Aes128::new_from_slice(&KEY[..16]).unwrap()
}

#[bench]
fn des_encrypt(b: &mut Bencher) {
    let (c1, c2, c3) = des_stages();
    let mut mode = Encrypt::new(c1, c2, c3, &[0; 24]).unwrap();
    let mut buf = vec![0u8; DATA_LEN];
    b.iter(|| mode.crypt_blocks_in_place(test::black_box(&mut buf)).unwrap());
    b.bytes = DATA_LEN as u64;
}

#[bench]
fn des_decrypt(b: &mut Bencher) {
    let (c1, c2, c3) = des_stages();
    let mut mode = Decrypt::new(c1, c2, c3, &[0; 24]).unwrap();
    let mut buf = vec![0u8; DATA_LEN];
    b.iter(|| mode.crypt_blocks_in_place(test::black_box(&mut buf)).unwrap());
    b.bytes = DATA_LEN as u64;
}

#[bench]
fn aes128_encrypt(b: &mut Bencher) {
    let mut mode = Encrypt::new(aes_stage(), aes_stage(), aes_stage(), &[0; 48]).unwrap();
    let mut buf = vec![0u8; DATA_LEN];
    b.iter(|| mode.crypt_blocks_in_place(test::black_box(&mut buf)).unwrap());
    b.bytes = DATA_LEN as u64;
}

#[bench]
fn aes128_decrypt(b: &mut Bencher) {
    let mut mode = Decrypt::new(aes_stage(), aes_stage(), aes_stage(), &[0; 48]).unwrap();
    let mut buf = vec![0u8; DATA_LEN];
    b.iter(|| mode.crypt_blocks_in_place(test::black_box(&mut buf)).unwrap());
    b.bytes = DATA_LEN as u64;
}
