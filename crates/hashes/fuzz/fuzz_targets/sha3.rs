#![no_main]

use fipshash::crypto::{Keccak256, Sha3_256};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours_sha3 = <Sha3_256 as traits::Digest>::digest(data);
  let ours_keccak = <Keccak256 as traits::Digest>::digest(data);

  use sha3::Digest as _;
  let ref_sha3 = sha3::Sha3_256::digest(data);
  let ref_keccak = sha3::Keccak256::digest(data);

  let mut exp_sha3 = [0u8; 32];
  exp_sha3.copy_from_slice(&ref_sha3);
  let mut exp_keccak = [0u8; 32];
  exp_keccak.copy_from_slice(&ref_keccak);

  assert_eq!(ours_sha3, exp_sha3);
  assert_eq!(ours_keccak, exp_keccak);
  assert_ne!(ours_sha3, ours_keccak);
});
