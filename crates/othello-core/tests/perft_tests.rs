use othello_core::perft::perft_root;

#[test]
fn test_perft() {
    let nodes = perft_root(7);
    assert_eq!(nodes, 55_092);
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_deep() {
    assert_eq!(perft_root(8), 390_216);
    assert_eq!(perft_root(9), 3_005_320);
}
