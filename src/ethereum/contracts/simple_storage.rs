//! SimpleStorage contract bindings.

use alloy::sol;

// Single-slot storage contract
sol! {
    contract SimpleStorage {
        function set(uint256 x) public;
        function get() public view returns (uint256);
    }
}
