use std::time::{Duration, Instant};

use lattice_xof::{ShakeStream, Shake128};

fn avg(d: Duration, n: u32) -> Duration { d / n }

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let iters: u32 = 2000;
    let seed = [0x5Au8; 34]; // rho || i || j, as fed to matrix expansion

    println!("=== CPU baseline: SHAKE128 ===");

    for &out_len in &[168usize, 504, 840] {
        let t = Instant::now();
        for _ in 0..iters {
            let mut xof = Shake128::new();
            xof.absorb(&seed).expect("absorbing");
            let _ = xof.squeeze(out_len);
        }
        println!("absorb 34 + squeeze {out_len}: {:?}", avg(t.elapsed(), iters));
    }

    // byte-at-a-time consumer, like a rejection sampler
    let t = Instant::now();
    for _ in 0..iters {
        let mut stream = ShakeStream::shake128(&seed);
        let mut acc = 0u8;
        for _ in 0..504 {
            acc ^= stream.next_u8();
        }
        std::hint::black_box(acc);
    }
    println!("stream next_u8 x504:   {:?}", avg(t.elapsed(), iters));

    let t = Instant::now();
    let mut perms = 0u32;
    let mut st = [0u64; 25];
    for _ in 0..iters {
        lattice_xof::keccak::keccak_f1600(&mut st);
        perms += 1;
    }
    log::info!("{} permutations, last lane {:016x}", perms, st[0]);
    println!("keccak_f1600:          {:?}", avg(t.elapsed(), iters));
}
