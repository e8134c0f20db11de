//! Tests of the per-token URI lookups

use alloy::{primitives::U256, signers::local::PrivateKeySigner};
use eyre::{ensure, Result};
use rand::{thread_rng, Rng};
use scripts::{
    solidity::ILithPlus,
    utils::{call_helper, initialize_lithplus, read_uri, send_tx},
};

use crate::{
    constants::NUM_FUZZ_IDS,
    integration_test,
    test_inventory::TestArgs,
    utils::{
        assert_no_uri, assert_reverts, assert_test_uris, deploy_lithplus,
        deploy_lithplus_behind_proxy, test_uri_table,
    },
};

/// Tests the URIs of a contract initialized directly
async fn test_uri_direct_initialize(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;

    assert_test_uris(&args.client, lithplus_address).await?;
    assert_test_uris(&args.reader, lithplus_address).await
}
integration_test!(test_uri_direct_initialize);

/// Tests the URIs of a contract initialized through the proxy
async fn test_uri_proxy_initialize(args: TestArgs) -> Result<()> {
    // The admin can't call through the proxy, so it is handed to an unused account
    let admin = PrivateKeySigner::random().address();
    let (proxy_address, implementation) =
        deploy_lithplus_behind_proxy(&args, admin, &test_uri_table()).await?;

    assert_test_uris(&args.client, proxy_address).await?;
    assert_test_uris(&args.reader, proxy_address).await?;

    // The state lives in the proxy, not in the implementation
    assert_no_uri(&args.reader, implementation, U256::ZERO).await
}
integration_test!(test_uri_proxy_initialize);

/// Tests that IDs past the end of the URI table have no URI
async fn test_uri_out_of_range(args: TestArgs) -> Result<()> {
    let table = test_uri_table();
    let lithplus_address = deploy_lithplus(&args, Some(&table)).await?;

    let num_suffixes = U256::from(table.suffixes.len());
    let mut ids = vec![
        num_suffixes,
        U256::from(u64::MAX),
        U256::from(u64::MAX) + U256::from(1),
        U256::MAX,
    ];

    let mut rng = thread_rng();
    for _ in 0..NUM_FUZZ_IDS {
        let id = U256::from_limbs(rng.gen());
        ids.push(id.max(num_suffixes));
    }

    for id in ids {
        assert_no_uri(&args.reader, lithplus_address, id).await?;
    }

    Ok(())
}
integration_test!(test_uri_out_of_range);

/// Tests that the contract can only be initialized once
async fn test_reinitialize_reverts(args: TestArgs) -> Result<()> {
    let table = test_uri_table();
    let lithplus_address = deploy_lithplus(&args, None).await?;

    initialize_lithplus(&args.client, lithplus_address, &table).await?;
    assert_reverts(
        initialize_lithplus(&args.client, lithplus_address, &table),
        "second initialization",
    )
    .await?;

    assert_test_uris(&args.reader, lithplus_address).await
}
integration_test!(test_reinitialize_reverts);

/// Tests the owner's management of the URI table
async fn test_uri_management(args: TestArgs) -> Result<()> {
    let table = test_uri_table();
    let lithplus_address = deploy_lithplus(&args, Some(&table)).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let base_uri = call_helper(&args.client, lithplus.baseUri()).await?._0;
    ensure!(base_uri == table.base_uri, "unexpected base URI {base_uri}");
    let uri_count = call_helper(&args.client, lithplus.uriCount()).await?._0;
    ensure!(
        uri_count == U256::from(table.suffixes.len()),
        "unexpected URI count {uri_count}"
    );

    // Appending a suffix assigns it the next ID
    send_tx(&args.client, lithplus.addUri("sample2.pdf".to_string())).await?;
    let uri = read_uri(&args.reader, lithplus_address, uri_count).await?;
    ensure!(uri == "https://www.lithtoken.io/sample2.pdf", "unexpected URI {uri}");

    // Replacing the base URI affects every ID
    send_tx(
        &args.client,
        lithplus.setBaseUri("https://ipfs.io/ipfs/".to_string()),
    )
    .await?;
    let uri = read_uri(&args.reader, lithplus_address, U256::ZERO).await?;
    ensure!(uri == "https://ipfs.io/ipfs/sample0.pdf", "unexpected URI {uri}");

    // Only the owner may manage the table
    let reader_lithplus = ILithPlus::new(lithplus_address, args.reader.provider.clone());
    assert_reverts(
        call_helper(&args.reader, reader_lithplus.addUri("sample3.pdf".to_string())),
        "non-owner addUri",
    )
    .await
}
integration_test!(test_uri_management);
