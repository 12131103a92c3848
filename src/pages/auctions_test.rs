use super::*;

#[test]
fn eth_amounts_render_with_one_decimal() {
    assert_eq!(format_eth(5.8), "5.8 ETH");
    assert_eq!(format_eth(3.0), "3.0 ETH");
    assert_eq!(format_eth(2.26), "2.3 ETH");
    assert_eq!(format_eth(10.0), "10.0 ETH");
}
