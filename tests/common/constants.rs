pub const XRPL_TEST_NET: &str = "https://s.altnet.rippletest.net:51234";
