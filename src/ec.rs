// SPDX-FileCopyrightText: 2014 kennytm
// SPDX-FileCopyrightText: 2023 Nakanishi
// SPDX-FileCopyrightText: 2024 Michael Spiegel
// SPDX-FileCopyrightText: 2025 Shun Sakai
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reed–Solomon error-correction coding over GF(256), block layout, and
//! codeword interleaving.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{EcLevel, QrError, QrResult, Version};

/// Multiplies two elements of GF(2^8) modulo the QR code's primitive
/// polynomial `x^8 + x^4 + x^3 + x^2 + 1` (0x11D), via Russian peasant
/// multiplication.
fn gf256_multiply(x: u8, y: u8) -> u8 {
    let mut z: u8 = 0;
    let mut y = y;
    for _ in 0..8 {
        z = (z << 1) ^ ((z >> 7) * 0x1D);
        z ^= (y >> 7) * x;
        y <<= 1;
    }
    z
}

/// Computes the Reed–Solomon generator polynomial of the given `degree`,
/// stored highest-to-lowest power, excluding the implicit leading `x^degree`
/// coefficient (which is always 1).
fn reed_solomon_compute_divisor(degree: usize) -> Vec<u8> {
    let mut result = vec![0u8; degree - 1];
    result.push(1);

    let mut root: u8 = 1;
    for _ in 0..degree {
        for j in 0..degree {
            result[j] = gf256_multiply(result[j], root);
            if j + 1 < result.len() {
                result[j] ^= result[j + 1];
            }
        }
        root = gf256_multiply(root, 0x02);
    }
    result
}

/// Computes the Reed–Solomon remainder of `data` divided by `divisor`; the
/// remainder is the block's error-correction codewords.
fn reed_solomon_compute_remainder(data: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut result = vec![0u8; divisor.len()];
    for &b in data {
        let factor = b ^ result.remove(0);
        result.push(0);
        for (x, &y) in result.iter_mut().zip(divisor.iter()) {
            *x ^= gf256_multiply(y, factor);
        }
    }
    result
}

/// Error-correction codewords per block, indexed `[version_index][ec_level]`.
/// Rows 0..40 are Normal versions 1..40 (transposed from the teacher's
/// `ECC_CODEWORDS_PER_BLOCK`); rows 40..44 are Micro versions 1..4. A `0`
/// entry marks an EC level unsupported by that version.
static EC_CODEWORDS_PER_BLOCK: [[u16; 4]; 44] = [
    [7, 10, 13, 17],
    [10, 16, 22, 28],
    [15, 26, 18, 22],
    [20, 18, 26, 16],
    [26, 24, 18, 22],
    [18, 16, 24, 28],
    [20, 18, 18, 26],
    [24, 22, 22, 26],
    [30, 22, 20, 24],
    [18, 26, 24, 28],
    [20, 30, 28, 24],
    [24, 22, 26, 28],
    [26, 22, 24, 22],
    [30, 24, 20, 24],
    [22, 24, 30, 24],
    [24, 28, 24, 30],
    [28, 28, 28, 28],
    [30, 26, 28, 28],
    [28, 26, 26, 26],
    [28, 26, 30, 28],
    [28, 26, 28, 30],
    [28, 28, 30, 24],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [26, 28, 30, 30],
    [28, 28, 28, 30],
    [30, 28, 30, 28],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    [30, 28, 30, 30],
    // Micro versions: M1, M2, M3, M4
    [2, 0, 0, 0],
    [5, 6, 0, 0],
    [6, 8, 0, 0],
    [8, 10, 14, 0],
];

/// Number of error-correction blocks, indexed the same way as
/// [`EC_CODEWORDS_PER_BLOCK`]. Every Micro version uses a single block.
static NUM_ERROR_CORRECTION_BLOCKS: [[u16; 4]; 44] = [
    [1, 1, 1, 1],
    [1, 1, 1, 1],
    [1, 1, 2, 2],
    [1, 2, 2, 4],
    [1, 2, 4, 4],
    [2, 4, 4, 4],
    [2, 4, 6, 5],
    [2, 4, 6, 6],
    [2, 5, 8, 8],
    [4, 5, 8, 8],
    [4, 5, 8, 11],
    [4, 8, 10, 11],
    [4, 9, 12, 16],
    [4, 9, 16, 16],
    [6, 10, 12, 18],
    [6, 10, 17, 16],
    [6, 11, 16, 19],
    [6, 13, 18, 21],
    [7, 14, 21, 25],
    [8, 16, 20, 25],
    [8, 17, 23, 25],
    [9, 17, 23, 34],
    [9, 18, 25, 30],
    [10, 20, 27, 32],
    [12, 21, 29, 35],
    [12, 23, 34, 37],
    [12, 25, 34, 40],
    [13, 26, 35, 42],
    [14, 28, 38, 45],
    [15, 29, 40, 48],
    [16, 31, 43, 51],
    [17, 33, 45, 54],
    [18, 35, 48, 57],
    [19, 37, 51, 60],
    [19, 38, 53, 63],
    [20, 40, 56, 66],
    [21, 43, 59, 70],
    [22, 45, 62, 74],
    [24, 47, 65, 77],
    [25, 49, 68, 81],
    // Micro versions: M1, M2, M3, M4
    [1, 0, 0, 0],
    [1, 1, 0, 0],
    [1, 1, 0, 0],
    [1, 1, 1, 0],
];

fn table_get(table: &[[u16; 4]; 44], version: Version, ec_level: EcLevel) -> QrResult<usize> {
    version.fetch(ec_level, table).map(usize::from)
}

/// The number of 8-bit codewords (data + error correction, remainder bits
/// discarded) available in a symbol of the given `version`, independent of
/// error-correction level.
fn total_codewords(version: Version) -> usize {
    match version {
        Version::Normal(ver) => {
            let ver = i32::from(ver);
            let mut modules = (16 * ver + 128) * ver + 64;
            if ver >= 2 {
                let numalign = ver / 7 + 2;
                modules -= (25 * numalign - 10) * numalign - 55;
                if ver >= 7 {
                    modules -= 36;
                }
            }
            (modules / 8) as usize
        }
        Version::Micro(ver) => [5, 10, 17, 24][(ver - 1) as usize],
    }
}

/// `true` for the two Micro QR versions (M1, M3) whose final data codeword
/// is only 4 bits wide (ISO/IEC 18004 §6.8.1).
fn has_nibble_last_codeword(version: Version) -> bool {
    matches!(version, Version::Micro(1) | Version::Micro(3))
}

/// The number of bits of the final data codeword that are actually placed
/// into the matrix (8 normally, 4 for M1/M3's short last codeword).
fn last_codeword_bits(version: Version) -> usize {
    if has_nibble_last_codeword(version) {
        4
    } else {
        8
    }
}

/// The total number of bits drawn into the matrix's data area: every
/// codeword's 8 bits, except the final data codeword of M1/M3, which
/// contributes only [`last_codeword_bits`].
#[must_use]
pub fn total_codeword_bits(version: Version, ec_level: EcLevel) -> QrResult<usize> {
    let total = total_codewords(version);
    let ec_per_block = table_get(&EC_CODEWORDS_PER_BLOCK, version, ec_level)?;
    let num_blocks = table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ec_level)?;
    let data_codewords = total - ec_per_block * num_blocks;
    Ok(if has_nibble_last_codeword(version) {
        (data_codewords - 1) * 8 + last_codeword_bits(version) + ec_per_block * num_blocks * 8
    } else {
        total * 8
    })
}

/// The number of data codewords (bytes) that `data` must occupy before
/// error correction, i.e. `total_codewords - ec_per_block * num_blocks`.
#[must_use]
pub fn total_data_codewords(version: Version, ec_level: EcLevel) -> QrResult<usize> {
    let total = total_codewords(version);
    let ec_per_block = table_get(&EC_CODEWORDS_PER_BLOCK, version, ec_level)?;
    let num_blocks = table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ec_level)?;
    Ok(total - ec_per_block * num_blocks)
}

/// Splits `data` into error-correction blocks, computes each block's
/// Reed–Solomon remainder, and interleaves the result column-wise.
///
/// Returns `(data_codewords, ec_codewords)` as two separately interleaved
/// sequences, matching the teacher's `ec::construct_codewords` call site in
/// `lib.rs`: the data stream is drawn into the matrix first, immediately
/// followed by the error-correction stream.
///
/// # Errors
///
/// Returns `Err(QrError::InvalidVersion)` if `ec_level` is not supported by
/// `version`, and `Err(QrError::DataTooLong)` if `data` does not fill the
/// version's data capacity exactly.
pub fn construct_codewords(
    data: &[u8],
    version: Version,
    ec_level: EcLevel,
) -> QrResult<(Vec<u8>, Vec<u8>)> {
    let ec_per_block = table_get(&EC_CODEWORDS_PER_BLOCK, version, ec_level)?;
    let num_blocks = table_get(&NUM_ERROR_CORRECTION_BLOCKS, version, ec_level)?;
    let total = total_codewords(version);
    let num_short_blocks = num_blocks - total % num_blocks;
    let short_block_len = total / num_blocks;

    if data.len() != total - ec_per_block * num_blocks {
        return Err(QrError::DataTooLong);
    }

    let divisor = reed_solomon_compute_divisor(ec_per_block);
    let mut data_blocks = Vec::with_capacity(num_blocks);
    let mut ec_blocks = Vec::with_capacity(num_blocks);
    let mut k = 0;
    for i in 0..num_blocks {
        let data_len = short_block_len - ec_per_block + usize::from(i >= num_short_blocks);
        let block = &data[k..k + data_len];
        k += data_len;
        ec_blocks.push(reed_solomon_compute_remainder(block, &divisor));
        data_blocks.push(block);
    }

    let longest_data_len = short_block_len - ec_per_block + usize::from(num_short_blocks < num_blocks);
    let mut data_out = Vec::with_capacity(data.len());
    for i in 0..longest_data_len {
        for block in &data_blocks {
            if let Some(&b) = block.get(i) {
                data_out.push(b);
            }
        }
    }

    let mut ec_out = Vec::with_capacity(ec_per_block * num_blocks);
    for i in 0..ec_per_block {
        for block in &ec_blocks {
            ec_out.push(block[i]);
        }
    }

    Ok((data_out, ec_out))
}

/// The maximum number of erroneous codewords per block that error
/// correction can still recover from, for the given `version`/`ec_level`.
///
/// # Errors
///
/// Returns `Err(QrError::InvalidVersion)` if `ec_level` is not supported by
/// `version`.
pub fn max_allowed_errors(version: Version, ec_level: EcLevel) -> QrResult<usize> {
    Ok(table_get(&EC_CODEWORDS_PER_BLOCK, version, ec_level)? / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_multiply_identity() {
        assert_eq!(gf256_multiply(1, 200), 200);
        assert_eq!(gf256_multiply(0, 200), 0);
    }

    #[test]
    fn test_total_codewords_normal_version_1() {
        assert_eq!(total_codewords(Version::Normal(1)), 26);
    }

    #[test]
    fn test_total_codewords_micro() {
        assert_eq!(total_codewords(Version::Micro(1)), 5);
        assert_eq!(total_codewords(Version::Micro(4)), 24);
    }

    #[test]
    fn test_construct_codewords_version_1_l() {
        let data = [
            0x10u8, 0x20, 0x0c, 0x56, 0x61, 0x80, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11, 0xec, 0x11,
            0xec, 0x11,
        ];
        let (data_out, ec_out) =
            construct_codewords(&data, Version::Normal(1), EcLevel::L).unwrap();
        assert_eq!(data_out, data);
        assert_eq!(ec_out.len(), 7);
    }

    #[test]
    fn test_max_allowed_errors() {
        assert_eq!(max_allowed_errors(Version::Normal(1), EcLevel::L).unwrap(), 3);
    }

    #[test]
    fn test_micro_unsupported_level_rejected() {
        assert!(matches!(
            total_data_codewords(Version::Micro(1), EcLevel::M),
            Err(QrError::InvalidVersion)
        ));
    }
}
