use alloy::primitives::{keccak256, Bytes, U256};

const WORD_SIZE: usize = 32;

/// 4-byte selector of a parameterless function, `keccak256("<name>()")[..4]`.
pub fn selector(function_name: &str) -> [u8; 4] {
    let hash = keccak256(format!("{}()", function_name).as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash[..4]);
    selector
}

/// Calldata for a parameterless view function.
pub fn encode_call(function_name: &str) -> Bytes {
    Bytes::from(selector(function_name).to_vec())
}

/// Reads the first return word as `uint256`, `None` when the output is shorter than a word.
pub fn decode_uint(output: &[u8]) -> Option<U256> {
    if output.len() < WORD_SIZE {
        return None;
    }

    U256::try_from_be_slice(&output[..WORD_SIZE])
}
