//! Basic usage example for rangeguard

use rangeguard::prelude::*;

fn main() {
    // Valid input passes through unchanged
    let port: CheckResult<u32> = uint16(8080_u32, Some("port"));
    match port {
        Ok(value) => println!("✓ port {value} fits in 16 bits"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // Invalid input fails with a displayable message
    let level: CheckResult<i32> = limited(12, Some(0), Some(9), Some("level"));
    match level {
        Ok(value) => println!("✓ level {value} is valid"),
        Err(e) => println!("✗ {e}"),
    }

    // clip saturates instead of failing
    println!("clip(12, 0, 9) = {}", clip(12, Some(0), Some(9)));

    // Length checks hand the collection back
    let header: CheckResult<Vec<u8>> = exact_len(vec![0x7f, 0x45, 0x4c, 0x46], 4, Some("magic"));
    match header {
        Ok(bytes) => println!("✓ magic is {} bytes", bytes.len()),
        Err(e) => println!("✗ {e}"),
    }
}
