use alloy::sol;

sol! {
   #[sol(rpc)]
   contract ERC20 {
        function totalSupply() public view returns (uint256);

        function decimals() public view returns (uint8);
   }
}
