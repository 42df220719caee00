alloy::sol! {
    // Minimal metadata surface shared by ERC20/ERC721 style contracts.
    interface INamed {
        function name() view returns (string);
    }
}
