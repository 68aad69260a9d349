//! Assinaturas das funções do AugustusSwapper e dos contratos sePSP.

pub const DIRECT_BALANCER_V2_GIVEN_IN: &str = "directBalancerV2GivenInSwap((bytes32 poolId,uint256 assetInIndex,uint256 assetOutIndex,uint256 amount,bytes userData)[] swaps,address[] assets,(address sender,bool fromInternalBalance,address recipient,bool toInternalBalance) funds,int256[] limits,uint256 fromAmount,uint256 toAmount,uint256 expectedAmount,uint256 deadline,uint256 feePercent,address vault,address partner,bool isApproved,address beneficiary,bytes permit,bytes16 uuid)";

pub const DIRECT_BALANCER_V2_GIVEN_OUT: &str = "directBalancerV2GivenOutSwap((bytes32 poolId,uint256 assetInIndex,uint256 assetOutIndex,uint256 amount,bytes userData)[] swaps,address[] assets,(address sender,bool fromInternalBalance,address recipient,bool toInternalBalance) funds,int256[] limits,uint256 fromAmount,uint256 toAmount,uint256 expectedAmount,uint256 deadline,uint256 feePercent,address vault,address partner,bool isApproved,address beneficiary,bytes permit,bytes16 uuid)";

pub const SWAP_ON_ZERO_X_V4: &str = "swapOnZeroXv4(address fromToken,address toToken,uint256 fromAmount,uint256 amountOutMin,address exchange,bytes payload)";

pub const SWAP_ON_ZERO_X_V2: &str = "swapOnZeroXv2(address fromToken,address toToken,uint256 fromAmount,uint256 amountOutMin,address exchange,bytes payload)";

pub const EXACT_INPUT_SINGLE: &str = "exactInputSingle((address tokenIn,address tokenOut,uint24 fee,address recipient,uint256 deadline,uint256 amountIn,uint256 amountOutMinimum,uint160 sqrtPriceLimitX96) params)";

pub const EXACT_INPUT: &str = "exactInput((bytes path,address recipient,uint256 deadline,uint256 amountIn,uint256 amountOutMinimum) params)";

pub const MULTI_SWAP: &str = "multiSwap((address fromToken,uint256 fromAmount,uint256 toAmount,uint256 expectedAmount,address beneficiary,(address to,uint256 totalNetworkFee,(address adapter,uint256 percent,uint256 networkFee,(uint256 index,address targetExchange,uint256 percent,bytes payload,uint256 networkFee)[] route)[] adapters)[] path,address partner,uint256 feePercent,bytes permit,uint256 deadline,bytes16 uuid) data)";

pub const SIMPLE_SWAP: &str = "simpleSwap((address fromToken,address toToken,uint256 fromAmount,uint256 toAmount,uint256 expectedAmount,address[] callees,bytes exchangeData,uint256[] startIndexes,uint256[] values,address beneficiary,address partner,uint256 feePercent,bytes permit,uint256 deadline,bytes16 uuid) data)";

pub const DIRECT_UNI_V3_SWAP: &str = "directUniV3Swap((address fromToken,address toToken,address exchange,uint256 fromAmount,uint256 toAmount,uint256 expectedAmount,uint256 feePercent,uint256 deadline,address partner,bool isApproved,address beneficiary,bytes path,bytes permit,bytes16 uuid) data)";

pub const DIRECT_CURVE_V1_SWAP: &str = "directCurveV1Swap((address fromToken,address toToken,address exchange,uint256 fromAmount,uint256 toAmount,uint256 expectedAmount,uint256 feePercent,int128 i,int128 j,address partner,bool isApproved,uint8 swapType,address beneficiary,bool needWrapNative,bytes permit,bytes16 uuid) data)";

pub const DEPOSIT: &str = "deposit(uint256 assetAmount)";

pub const DEPOSIT_PSP_AND_ETH: &str = "depositPSPAndEth(uint256 pspAmount,uint256 minBptOut,bytes pspPermit)";

pub const DEPOSIT_PSP_AND_WETH: &str = "depositPSPAndWeth(uint256 pspAmount,uint256 wethAmount,uint256 minBptOut,bytes pspPermit)";
