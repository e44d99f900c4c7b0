use proptest::prelude::*;

use prontoblast_shared::{
    encode_pronto, raw_signal, BurstPair, Carrier, DeviceModel, ErrorKind, IrError, ProntoSignal,
    RawSignal, SignalEncoder,
};

const MINIMAL: &str = "0000 006D 0002 0000 0010 0010 0010 0010";

fn pronto(intro: &[(u16, u16)], repeat: &[(u16, u16)]) -> String {
    let mut words = vec![0, 0x6d, intro.len() as u16, repeat.len() as u16];
    for &(p, g) in intro.iter().chain(repeat) {
        words.push(p);
        words.push(g);
    }
    words
        .iter()
        .map(|w| format!("{:04X}", w))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn minimal_code() {
    let (code, frequency) = encode_pronto(MINIMAL, 1).unwrap();
    let raw = RawSignal::from_base64(&code).unwrap();

    assert_eq!(frequency, 38029);
    assert_eq!(raw.edge_count(), 3);
    assert_eq!(raw.distinct_times(), &[Carrier::new(0x6d).ticks_to_us(0x10)]);
    assert_eq!(raw.distinct_times(), &[420]);
    assert_eq!(raw.edge_pairs().len(), 2);
    assert!(raw
        .edge_pairs()
        .iter()
        .all(|p| p.pulse() == 0 && p.gap() == 0));
    assert!(raw.times_index()[1..].iter().all(|&t| t == 0));
}

#[test]
fn empty_intro_transmits_repeat_once() {
    let code = pronto(&[], &[(0x10, 0x20), (0x10, 0x40)]);
    let signal = ProntoSignal::parse(&code).unwrap();

    let (payload, _) = encode_pronto(&code, 0).unwrap();
    let raw = RawSignal::from_base64(&payload).unwrap();

    assert_eq!(raw.burst_pairs(), signal.repeat);
    assert_eq!(raw.edge_count(), 3);
}

#[test]
fn repeats_multiply_repeat_part() {
    let code = pronto(&[(0x156, 0xab)], &[(0x15, 0x40)]);

    for repeats in 0..4 {
        let (payload, _) = encode_pronto(&code, repeats).unwrap();
        let raw = RawSignal::from_base64(&payload).unwrap();
        assert_eq!(raw.edge_pairs().len(), 1 + repeats as usize);
        assert_eq!(usize::from(raw.edge_count()), 2 * raw.edge_pairs().len() - 1);
    }
}

#[test]
fn marker_rejected() {
    for marker in ["0100", "5000", "900A", "FFFF"] {
        let code = format!("{} 006D 0001 0000 0010 0010", marker);
        let err = encode_pronto(&code, 1).unwrap_err();
        assert!(matches!(err, IrError::UnsupportedPronto(_)), "{}", marker);
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn negative_repeats_rejected() {
    let err = encode_pronto(MINIMAL, -1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn capacity_boundary() {
    let sixteen: Vec<(u16, u16)> = (0..8).map(|i| (0x10 + i * 2, 0x11 + i * 2)).collect();
    assert!(encode_pronto(&pronto(&sixteen, &[]), 1).is_ok());

    let mut seventeen = sixteen.clone();
    seventeen.push((0x80, 0x80));
    let err = encode_pronto(&pronto(&seventeen, &[]), 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Capacity);
}

#[test]
fn truncated_is_structural() {
    let err = encode_pronto("0000 006D 0003 0000 0010 0010 0010 0010", 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn same_input_same_error() {
    let a = encode_pronto("0100 006D 0001 0000 0010 0010", 1).unwrap_err();
    let b = encode_pronto("0100 006D 0001 0000 0010 0010", 1).unwrap_err();
    assert_eq!(a.to_string(), b.to_string());
    assert!(!a.is_retryable());
}

#[cfg(feature = "heatshrink")]
#[test]
fn play_remote_pronto() {
    let enc = SignalEncoder::new(DeviceModel::ChuangmiRemote).unwrap();

    let cmd: prontoblast_shared::PlayCommand = format!("pronto:{}:2", MINIMAL).parse().unwrap();
    let params = enc.play_params(&cmd).unwrap();
    let raw = enc.decode_payload(&params.code).unwrap();

    assert_eq!(params.freq, 38029);
    assert_eq!(raw.edge_pairs().len(), 2);
}

#[cfg(not(feature = "heatshrink"))]
#[test]
fn remote_needs_compressor() {
    let err = SignalEncoder::new(DeviceModel::ChuangmiRemote).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Capability);

    assert!(SignalEncoder::new(DeviceModel::ChuangmiIr).is_ok());
}

fn arb_pairs() -> impl Strategy<Value = Vec<BurstPair>> {
    (
        prop::collection::btree_set(1u32..100_000, 1..=16),
        prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..64),
    )
        .prop_map(|(times, picks)| {
            let times: Vec<u32> = times.into_iter().collect();
            picks
                .into_iter()
                .map(|(p, g)| BurstPair::new(*p.get(&times), *g.get(&times)))
                .collect()
        })
}

proptest! {
    #[test]
    fn quantization_is_lossless(pairs in arb_pairs()) {
        let raw = raw_signal(&pairs, &[], 0).unwrap();
        let decoded = RawSignal::from_bytes(&raw.to_bytes()).unwrap();

        prop_assert_eq!(decoded.burst_pairs(), pairs.clone());
        prop_assert_eq!(usize::from(decoded.edge_count()), 2 * pairs.len() - 1);

        let times = decoded.distinct_times();
        prop_assert!(times.windows(2).all(|w| w[0] < w[1]));
    }
}
