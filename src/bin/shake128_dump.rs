// shake128_dump [hex-input] [out-len]
// Prints SHAKE128(input) as hex. Defaults: empty input, 32 bytes.

use lattice_xof::Shake128;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(h) => hex::decode(h.trim()).expect("input must be hex"),
        None => Vec::new(),
    };
    let out_len: usize = match args.next() {
        Some(n) => n.trim().parse().expect("out-len must be a byte count"),
        None => 32,
    };

    let mut xof = Shake128::new();
    xof.absorb(&input).expect("fresh state absorbs");
    let out = xof.squeeze(out_len);

    log::info!("absorbed {} bytes, squeezed {} bytes", input.len(), out.len());
    println!("SHAKE128 ({}) = {}", out_len, hex::encode(out));
}
