// Compares this SHAKE128 against the RustCrypto `sha3` crate:
//  1) one-shot output for edge-case input/output lengths around lane and block size
//  2) the same inputs absorbed in odd chunks and squeezed in odd pieces
//  3) rough timing of both on a 1 MiB input

use std::time::Instant;

use lattice_xof::shake_params::SHAKE128_RATE;
use lattice_xof::Shake128;
use sha3::digest::{ExtendableOutput, Update, XofReader};

fn reference(input: &[u8], len: usize) -> Vec<u8> {
    let mut h = sha3::Shake128::default();
    h.update(input);
    let mut out = vec![0u8; len];
    h.finalize_xof().read(&mut out);
    out
}

fn pattern(len: usize, tag: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(tag)).collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let in_lens = [
        0usize, 1, 7, 8, 9,
        SHAKE128_RATE - 1, SHAKE128_RATE, SHAKE128_RATE + 1,
        2 * SHAKE128_RATE, 1000,
    ];
    let out_lens = [1usize, 32, 64, SHAKE128_RATE, SHAKE128_RATE + 1, 500];
    let chunk_sizes = [1usize, 3, 7, 8, 13, 167];

    let mut ok = 0usize;
    let mut fail = 0usize;

    println!("=== SHAKE128: one-shot vs sha3 ===");
    for &n in &in_lens {
        let input = pattern(n, n as u8);
        for &m in &out_lens {
            let ours = lattice_xof::shake128_vec(&input, m);
            if ours == reference(&input, m) {
                ok += 1;
            } else {
                fail += 1;
                println!("FAIL: in={n} out={m}");
            }
        }
    }

    println!("=== SHAKE128: chunked absorb / squeeze vs sha3 ===");
    for &n in &in_lens {
        let input = pattern(n, 0xA5);
        for &c in &chunk_sizes {
            let mut xof = Shake128::new();
            for chunk in input.chunks(c) {
                xof.absorb(chunk).expect("absorbing");
            }
            let mut ours = Vec::new();
            while ours.len() < 500 {
                let take = c.min(500 - ours.len());
                ours.extend(xof.squeeze(take));
            }
            if ours == reference(&input, 500) {
                ok += 1;
            } else {
                fail += 1;
                println!("FAIL: in={n} chunk={c}");
            }
        }
    }

    println!("OK: {ok}, FAIL: {fail}");
    if fail > 0 {
        log::error!("{fail} mismatches against sha3");
    }

    println!("\n=== SHAKE128: timing, 1 MiB in / 1 KiB out ===");
    let big = pattern(1 << 20, 0x11);
    let iters = 20u32;

    let t0 = Instant::now();
    for _ in 0..iters {
        let _ = lattice_xof::shake128_vec(&big, 1024);
    }
    println!("lattice_xof avg: {:?}/op", t0.elapsed() / iters);

    let t1 = Instant::now();
    for _ in 0..iters {
        let _ = reference(&big, 1024);
    }
    println!("sha3 avg:        {:?}/op", t1.elapsed() / iters);

    println!("\nDONE.");
}
