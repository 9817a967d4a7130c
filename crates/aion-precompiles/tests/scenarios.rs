//! End-to-end scenarios, one function per named case.

use aion_precompiles::adapters::{Ed25519CryptoProvider, InMemoryWordStore};
use aion_precompiles::domain::value_objects::{Address, Scalar, PREFIX_EOA};
use aion_precompiles::msc::MscEngine;
use aion_precompiles::ports::inbound::{PrecompiledContract, ResultCode};
use aion_precompiles::ports::WordStore;
use aion_precompiles::trs::{TrsCore, TrsUseHandler};
use aion_crypto::Ed25519KeyPair;

const AMOUNT_WIDTH: usize = 128;

fn owner_address(keypair: &Ed25519KeyPair) -> Address {
    let mut bytes = keypair.public_key_bytes();
    bytes[0] = PREFIX_EOA;
    Address::new(bytes)
}

fn create_frame(threshold: u64, owners: &[Address]) -> Vec<u8> {
    let mut out = vec![0x00u8];
    out.extend_from_slice(&threshold.to_be_bytes());
    for owner in owners {
        out.extend_from_slice(owner.as_bytes());
    }
    out
}

fn amount_field(value: u64) -> Vec<u8> {
    let mut bytes = vec![0u8; AMOUNT_WIDTH];
    bytes[AMOUNT_WIDTH - 8..].copy_from_slice(&value.to_be_bytes());
    bytes
}

fn canonical_message(nonce: u64, to: Address, amount: u64, nrg_limit: u64, nrg_price: u64) -> Vec<u8> {
    let mut message = Vec::new();
    message.extend_from_slice(&Scalar::from_u64(nonce).encode_signed_minimal());
    message.extend_from_slice(to.as_bytes());
    message.extend_from_slice(
        &Scalar::from_bytes_be_unsigned(&amount_field(amount)).encode_signed_minimal(),
    );
    message.extend_from_slice(&nrg_limit.to_be_bytes());
    message.extend_from_slice(&nrg_price.to_be_bytes());
    message
}

fn send_frame(wallet: Address, sig_frames: &[[u8; 96]], amount: u64, nrg_price: u64, to: Address) -> Vec<u8> {
    let mut out = vec![0x01u8];
    out.extend_from_slice(wallet.as_bytes());
    for frame in sig_frames {
        out.extend_from_slice(frame);
    }
    out.extend_from_slice(&amount_field(amount));
    out.extend_from_slice(&nrg_price.to_be_bytes());
    out.extend_from_slice(to.as_bytes());
    out
}

fn sign_frame(keypair: &Ed25519KeyPair, message: &[u8]) -> [u8; 96] {
    let mut frame = [0u8; 96];
    frame[0..32].copy_from_slice(&keypair.public_key_bytes());
    frame[32..96].copy_from_slice(&keypair.sign(message));
    frame
}

#[test]
fn s1_msc_create_minimum() {
    let k1 = Ed25519KeyPair::generate();
    let k2 = Ed25519KeyPair::generate();
    let k3 = Ed25519KeyPair::generate();
    let owners = [owner_address(&k1), owner_address(&k2), owner_address(&k3)];

    let engine = MscEngine::new();
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();

    let input = create_frame(2, &owners);
    let result = engine.execute(&mut store, &crypto, owners[0], &input, 100_000);

    assert_eq!(result.code, ResultCode::Success);
    assert_eq!(result.energy_remaining, 100_000 - 21_000);

    let mut preimage = 2u64.to_be_bytes().to_vec();
    for owner in &owners {
        preimage.extend_from_slice(owner.as_bytes());
    }
    let mut expected_wallet = aion_crypto::hash32(&preimage);
    expected_wallet[0] = PREFIX_EOA;
    assert_eq!(result.return_data, expected_wallet);

    let wallet = Address::from_slice(&result.return_data).unwrap();
    assert_eq!(store.get_balance(wallet), 0u64);
    assert_eq!(store.get_nonce(wallet), 0);
}

#[test]
fn s2_msc_send_exact_threshold() {
    let k1 = Ed25519KeyPair::generate();
    let k2 = Ed25519KeyPair::generate();
    let k3 = Ed25519KeyPair::generate();
    let owners = [owner_address(&k1), owner_address(&k2), owner_address(&k3)];

    let engine = MscEngine::new();
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();

    let created = engine.execute(&mut store, &crypto, owners[0], &create_frame(2, &owners), 100_000);
    let wallet = Address::from_slice(&created.return_data).unwrap();
    store.seed_balance(wallet, Scalar::from_u64(100_000));

    let to = Address::from_prefix_and_body(PREFIX_EOA, [0x99; 31]);
    let message = canonical_message(0, to, 10, 100_000, 10_000_000_000);
    let sigs = [sign_frame(&k1, &message), sign_frame(&k2, &message)];
    let input = send_frame(wallet, &sigs, 10, 10_000_000_000, to);

    let result = engine.execute(&mut store, &crypto, owners[0], &input, 100_000);

    assert_eq!(result.code, ResultCode::Success);
    assert_eq!(store.get_balance(wallet), 99_990u64);
    assert_eq!(store.get_nonce(wallet), 1);
    assert_eq!(store.get_balance(to), 10u64);
}

#[test]
fn s3_msc_send_wrong_nonce_fails() {
    let k1 = Ed25519KeyPair::generate();
    let k2 = Ed25519KeyPair::generate();
    let k3 = Ed25519KeyPair::generate();
    let owners = [owner_address(&k1), owner_address(&k2), owner_address(&k3)];

    let engine = MscEngine::new();
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();

    let created = engine.execute(&mut store, &crypto, owners[0], &create_frame(2, &owners), 100_000);
    let wallet = Address::from_slice(&created.return_data).unwrap();
    store.seed_balance(wallet, Scalar::from_u64(100_000));

    let to = Address::from_prefix_and_body(PREFIX_EOA, [0x99; 31]);
    let good_message = canonical_message(0, to, 10, 100_000, 10_000_000_000);
    let bad_message = canonical_message(u64::MAX, to, 10, 100_000, 10_000_000_000);
    let sigs = [sign_frame(&k1, &good_message), sign_frame(&k2, &bad_message)];
    let input = send_frame(wallet, &sigs, 10, 10_000_000_000, to);

    let balance_before = store.get_balance(wallet);
    let nonce_before = store.get_nonce(wallet);
    let result = engine.execute(&mut store, &crypto, owners[0], &input, 100_000);

    assert_eq!(result.code, ResultCode::Failure);
    assert_eq!(store.get_balance(wallet), balance_before);
    assert_eq!(store.get_nonce(wallet), nonce_before);
    assert_eq!(store.get_balance(to), 0u64);
}

#[test]
fn s4_msc_send_caller_not_owner_fails() {
    let k1 = Ed25519KeyPair::generate();
    let k2 = Ed25519KeyPair::generate();
    let k3 = Ed25519KeyPair::generate();
    let owners = [owner_address(&k1), owner_address(&k2), owner_address(&k3)];
    let intruder = Ed25519KeyPair::generate();

    let engine = MscEngine::new();
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();

    let created = engine.execute(&mut store, &crypto, owners[0], &create_frame(2, &owners), 100_000);
    let wallet = Address::from_slice(&created.return_data).unwrap();
    store.seed_balance(wallet, Scalar::from_u64(100_000));

    let to = Address::from_prefix_and_body(PREFIX_EOA, [0x99; 31]);
    let message = canonical_message(0, to, 10, 100_000, 10_000_000_000);
    let sigs = [sign_frame(&k1, &message), sign_frame(&k2, &message)];
    let input = send_frame(wallet, &sigs, 10, 10_000_000_000, to);

    let result = engine.execute(&mut store, &crypto, owner_address(&intruder), &input, 100_000);

    assert_eq!(result.code, ResultCode::Failure);
    assert_eq!(store.get_balance(wallet), 100_000u64);
}

#[test]
fn s5_trs_deposit_enrols_once() {
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();
    let contract = Address::from_prefix_and_body(aion_precompiles::domain::value_objects::PREFIX_TRS, [4u8; 31]);
    let d1 = Address::from_prefix_and_body(PREFIX_EOA, [5u8; 31]);

    TrsCore::set_specs(&mut store, contract, false, true, 12, 0, 0);
    store.seed_balance(d1, Scalar::from_u64(100));

    let handler = TrsUseHandler::new();
    let frame = |amount: u64| {
        let mut out = vec![0u8];
        out.extend_from_slice(contract.as_bytes());
        out.extend_from_slice(&amount_field(amount));
        out
    };

    let first = handler.execute(&mut store, &crypto, d1, &frame(40), 100_000);
    let second = handler.execute(&mut store, &crypto, d1, &frame(40), 100_000);

    assert_eq!(first.code, ResultCode::Success);
    assert_eq!(second.code, ResultCode::Success);
    assert_eq!(store.get_balance(d1), 20u64);
    assert_eq!(TrsCore::get_deposit_balance(&store, contract, d1), 80u64);
    assert_eq!(TrsCore::get_total_balance(&store, contract), 80u64);
    assert_eq!(TrsCore::depositor_count(&store, contract), 1);
    assert_eq!(TrsCore::get_list_head(&store, contract), Some(d1));
}

#[test]
fn s6_trs_deposit_zero_does_not_enrol() {
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();
    let contract = Address::from_prefix_and_body(aion_precompiles::domain::value_objects::PREFIX_TRS, [6u8; 31]);
    let d2 = Address::from_prefix_and_body(PREFIX_EOA, [7u8; 31]);

    TrsCore::set_specs(&mut store, contract, false, true, 12, 0, 0);
    store.seed_balance(d2, Scalar::from_u64(100));

    let handler = TrsUseHandler::new();
    let mut input = vec![0u8];
    input.extend_from_slice(contract.as_bytes());
    input.extend_from_slice(&amount_field(0));

    let result = handler.execute(&mut store, &crypto, d2, &input, 100_000);

    assert_eq!(result.code, ResultCode::Success);
    assert_eq!(TrsCore::depositor_count(&store, contract), 0);
    assert_eq!(TrsCore::get_total_balance(&store, contract), 0u64);
    assert!(!TrsCore::is_enrolled(&store, contract, d2));
}

#[test]
fn property_failure_never_mutates_state() {
    let k1 = Ed25519KeyPair::generate();
    let k2 = Ed25519KeyPair::generate();
    let owners = [owner_address(&k1), owner_address(&k2)];

    let engine = MscEngine::new();
    let crypto = Ed25519CryptoProvider;
    let mut store = InMemoryWordStore::new();

    // A malformed owner list (odd body length) must be rejected with no
    // state mutation at all.
    let mut bad_input = vec![0x00u8];
    bad_input.extend_from_slice(&2u64.to_be_bytes());
    bad_input.extend_from_slice(owners[0].as_bytes());
    bad_input.push(0xFF); // one stray byte breaks the 32-byte alignment

    let result = engine.execute(&mut store, &crypto, owners[0], &bad_input, 100_000);
    assert_eq!(result.code, ResultCode::Failure);
    assert!(!store.has_pending_writes());
}

#[test]
fn property_deposit_balance_round_trips_except_at_zero() {
    let mut store = InMemoryWordStore::new();
    let contract = Address::from_prefix_and_body(aion_precompiles::domain::value_objects::PREFIX_TRS, [8u8; 31]);
    let account = Address::from_prefix_and_body(PREFIX_EOA, [9u8; 31]);

    for magnitude in [1u64, 255, 65_536, u64::MAX] {
        let balance = Scalar::from_u64(magnitude);
        assert!(TrsCore::set_deposit_balance(&mut store, contract, account, &balance));
        assert_eq!(TrsCore::get_deposit_balance(&store, contract, account), balance);
    }

    // The documented asymmetry: setting zero is a no-op, not a write of zero.
    let before = TrsCore::get_deposit_balance(&store, contract, account);
    assert!(TrsCore::set_deposit_balance(&mut store, contract, account, &Scalar::zero()));
    assert_eq!(TrsCore::get_deposit_balance(&store, contract, account), before);
}

#[test]
fn property_list_is_symmetric_with_unique_head_and_tail() {
    let mut store = InMemoryWordStore::new();
    let contract = Address::from_prefix_and_body(aion_precompiles::domain::value_objects::PREFIX_TRS, [10u8; 31]);
    let accounts: Vec<Address> = (0..4u8)
        .map(|i| Address::from_prefix_and_body(PREFIX_EOA, [20 + i; 31]))
        .collect();

    for &account in &accounts {
        TrsCore::set_deposit_balance(&mut store, contract, account, &Scalar::from_u64(1));
        TrsCore::insert_at_head(&mut store, contract, account);
    }

    let forward = TrsCore::iter_depositors(&store, contract);
    assert_eq!(forward.len(), accounts.len());

    let head = forward[0];
    let tail = *forward.last().unwrap();
    assert_eq!(TrsCore::get_list_prev(&store, contract, head), None);
    assert_eq!(TrsCore::get_list_next(&store, contract, tail), None);

    let mut backward = Vec::new();
    let mut cursor = Some(tail);
    while let Some(account) = cursor {
        backward.push(account);
        cursor = TrsCore::get_list_prev(&store, contract, account);
    }
    backward.reverse();
    assert_eq!(forward, backward);
}
