use cube_lib::cube333::moves::{random_sequence, Move333};
use cube_lib::cube333::parse::parse;
use cube_lib::cube333::StickerCube;
use cube_lib::error::Error;
use cube_lib::moves::MoveSequence;
use cube_lib::reconstruction::{check_all, validate, Reconstruction, Record};
use cube_lib::simulator::Simulator;

const BLOCK: &str = "
    D2 R2 B' U2 F' R2 B L2 B' L' D' F L F U' R' D

    x2 // inspection
    D R' F R D2 // cross
    U' R U R' // 1st pair
    y' U R U' R' U2 R U R' // 2nd pair
";

#[test_log::test]
fn block_parses_into_moves() {
    let r = Reconstruction::from_text("https://reco.nz/solve/3", BLOCK).unwrap();
    assert_eq!(r.scramble().len(), 17);
    assert_eq!(r.solve().len(), 1 + 5 + 4 + 9);
    assert_eq!(
        r.solve().to_string(),
        "X2 D R' F R D2 U' R U R' Y' U R U' R' U2 R U R'"
    );
    // Only two pairs in, this is not a solve
    assert!(!r.is_valid::<StickerCube>().unwrap());
}

#[test_log::test]
fn full_solve_of_a_generated_scramble() {
    let scramble = random_sequence(25, &mut fastrand::Rng::with_seed(3));
    let solve = scramble.clone().inverse().cancel();

    let text = format!("{scramble}\n// solve\n{solve} // done\n");
    let r = Reconstruction::from_text("generated", &text).unwrap();
    assert_eq!(r.scramble(), &scramble);
    assert_eq!(r.check::<StickerCube>(), Ok(()));

    let record = r.to_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back.into_reconstruction(), Ok(r));
}

#[test]
fn simulator_sees_canonical_strings() {
    let alg = parse("r U R' u2' x");
    assert_eq!(alg.canonical_string(), "R Mi U Ri Ui Ui E E X");

    let by_string = StickerCube::solved()
        .apply(&alg.canonical_string())
        .unwrap();
    assert_eq!(by_string, StickerCube::SOLVED.make_moves(&alg));
}

#[test]
fn validator_identity_on_handwritten_algs() {
    for alg in [
        "R U R' U R U2 R'",
        "M2 U M U2 M' U M2",
        "r U R' U' r' F R F'",
        "x R' U R' D2 R U' R' D2 R2 x'",
        "F R U' R' U' R U R' F' R U R' U' R' F R F'",
        "l' U' L U R U' r' F",
    ] {
        let scramble = parse(alg);
        assert!(
            validate::<StickerCube>(&scramble, &scramble.clone().inverse()).unwrap(),
            "{alg}"
        );
    }
}

#[test]
fn known_permutations_have_known_orders() {
    // T perm has order 2, U perm has order 3
    let t_perm = parse("R U R' U' R' F R2 U' R' U' R U R' F'");
    assert!(validate::<StickerCube>(&t_perm, &t_perm).unwrap());

    let ua_perm = parse("M2 U M U2 M' U M2");
    let twice = ua_perm.clone().append(ua_perm.clone());
    assert!(!validate::<StickerCube>(&ua_perm, &ua_perm).unwrap());
    assert!(validate::<StickerCube>(&twice, &ua_perm).unwrap());
}

#[test]
fn batch_reports_each_item() {
    let results = check_all::<StickerCube, _, _, _>(vec![
        ("ok".to_owned(), "R U\nU' R'".to_owned()),
        ("bad".to_owned(), "R\nU".to_owned()),
    ]);
    assert!(results[0].is_ok());
    assert!(matches!(&results[1], Err(Error::ValidationFailed { url }) if url == "bad"));
}

#[test]
fn sequences_from_lists() {
    let moves: Vec<Move333> = ["R", "U2'", "f"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let seq = MoveSequence::from(moves);
    assert_eq!(seq, parse("R U2' f"));
    assert_eq!(seq.to_string(), "R U2' f");
}
