//! Tests of minting & transferring tokens

use alloy::{
    primitives::{Address, Bytes, U256},
    signers::local::PrivateKeySigner,
};
use eyre::{ensure, Result};
use scripts::{
    solidity::ILithPlus,
    utils::{call_helper, send_tx},
};

use crate::{
    constants::{MINT_AMOUNT, REVERTING_TX_GAS_LIMIT, TRANSFER_AMOUNT},
    integration_test,
    test_inventory::TestArgs,
    utils::{
        assert_reverted_receipt, assert_reverts, deploy_lithplus, funded_client, test_uri_table,
    },
};

/// Tests that only the owner can mint, and that minting credits the recipient
async fn test_owner_only_mint(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let owner = call_helper(&args.client, lithplus.owner()).await?._0;
    ensure!(owner == args.client.address()?, "unexpected owner {owner:#x}");

    let recipient = PrivateKeySigner::random().address();
    let id = U256::ZERO;
    let amount = U256::from(MINT_AMOUNT);
    send_tx(&args.client, lithplus.mint(recipient, id, amount)).await?;

    let balance = call_helper(&args.client, lithplus.balanceOf(recipient, id))
        .await?
        ._0;
    ensure!(balance == amount, "unexpected balance {balance}");

    let reader_lithplus = ILithPlus::new(lithplus_address, args.reader.provider.clone());
    assert_reverts(
        call_helper(&args.reader, reader_lithplus.mint(recipient, id, amount)),
        "non-owner mint",
    )
    .await?;
    assert_reverts(
        call_helper(
            &args.reader,
            reader_lithplus.mintBatch(recipient, vec![id], vec![amount]),
        ),
        "non-owner batch mint",
    )
    .await
}
integration_test!(test_owner_only_mint);

/// Tests transferring tokens, and that unauthorized or overdrawn transfers revert
async fn test_transfer(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let holder = args.client.address()?;
    let recipient = PrivateKeySigner::random().address();
    let ids = vec![U256::ZERO, U256::from(1)];
    let amounts = vec![U256::from(MINT_AMOUNT); ids.len()];
    send_tx(
        &args.client,
        lithplus.mintBatch(holder, ids.clone(), amounts),
    )
    .await?;

    let transfer_amount = U256::from(TRANSFER_AMOUNT);
    send_tx(
        &args.client,
        lithplus.safeTransferFrom(holder, recipient, ids[0], transfer_amount, Bytes::new()),
    )
    .await?;

    let balances = call_helper(
        &args.client,
        lithplus.balanceOfBatch(vec![holder, recipient, recipient], vec![ids[0], ids[0], ids[1]]),
    )
    .await?
    ._0;
    let expected = vec![
        U256::from(MINT_AMOUNT - TRANSFER_AMOUNT),
        transfer_amount,
        U256::ZERO,
    ];
    ensure!(balances == expected, "unexpected balances {balances:?}");

    // The recipient's tokens can't be moved by the holder without approval
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.safeTransferFrom(recipient, holder, ids[0], transfer_amount, Bytes::new()),
        ),
        "unapproved transfer",
    )
    .await?;

    // Nor can more tokens be moved than are held
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.safeTransferFrom(
                holder,
                recipient,
                ids[1],
                U256::from(MINT_AMOUNT + 1),
                Bytes::new(),
            ),
        ),
        "overdrawn transfer",
    )
    .await
}
integration_test!(test_transfer);

/// Tests that batches of unequal lengths revert
async fn test_length_mismatch(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let holder = args.client.address()?;
    let ids = vec![U256::ZERO, U256::from(1)];
    let amounts = vec![U256::from(MINT_AMOUNT)];

    assert_reverts(
        send_tx(
            &args.client,
            lithplus.mintBatch(holder, ids.clone(), amounts.clone()),
        ),
        "mismatched batch mint",
    )
    .await?;
    assert_reverts(
        call_helper(
            &args.client,
            lithplus.balanceOfBatch(vec![holder], ids.clone()),
        ),
        "mismatched balance batch",
    )
    .await?;

    send_tx(
        &args.client,
        lithplus.mintBatch(holder, ids.clone(), vec![U256::from(MINT_AMOUNT); ids.len()]),
    )
    .await?;
    let recipient = PrivateKeySigner::random().address();
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.safeBatchTransferFrom(holder, recipient, ids, amounts, Bytes::new()),
        ),
        "mismatched batch transfer",
    )
    .await
}
integration_test!(test_length_mismatch);

/// Tests that tokens can't be minted or transferred to the zero address
async fn test_zero_address_recipient(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let holder = args.client.address()?;
    let id = U256::ZERO;
    let amount = U256::from(MINT_AMOUNT);

    assert_reverts(
        send_tx(&args.client, lithplus.mint(Address::ZERO, id, amount)),
        "mint to the zero address",
    )
    .await?;
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.mintBatch(Address::ZERO, vec![id], vec![amount]),
        ),
        "batch mint to the zero address",
    )
    .await?;

    send_tx(&args.client, lithplus.mint(holder, id, amount)).await?;
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.safeTransferFrom(holder, Address::ZERO, id, amount, Bytes::new()),
        ),
        "transfer to the zero address",
    )
    .await?;

    let balance = call_helper(&args.client, lithplus.balanceOf(holder, id))
        .await?
        ._0;
    ensure!(balance == amount, "balance changed to {balance}");
    Ok(())
}
integration_test!(test_zero_address_recipient);

/// Tests that a reverting transaction that skips gas estimation is mined & reported as reverted
async fn test_reverted_receipt(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    assert_reverted_receipt(
        send_tx(
            &args.client,
            lithplus
                .mint(Address::ZERO, U256::ZERO, U256::from(MINT_AMOUNT))
                .gas(REVERTING_TX_GAS_LIMIT),
        ),
        "mint to the zero address",
    )
    .await
}
integration_test!(test_reverted_receipt);

/// Tests that an account can't approve itself as an operator
async fn test_self_approval(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let holder = args.client.address()?;
    assert_reverts(
        send_tx(&args.client, lithplus.setApprovalForAll(holder, true)),
        "self approval",
    )
    .await?;

    let approved = call_helper(&args.client, lithplus.isApprovedForAll(holder, holder))
        .await?
        ._0;
    ensure!(!approved, "holder approved as its own operator");
    Ok(())
}
integration_test!(test_self_approval);

/// Tests that an approved operator can move the holder's tokens until its approval is revoked
async fn test_operator_transfer(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let holder = args.client.address()?;
    let id = U256::ZERO;
    send_tx(
        &args.client,
        lithplus.mint(holder, id, U256::from(MINT_AMOUNT)),
    )
    .await?;

    let operator_client = funded_client(&args).await?;
    let operator = operator_client.address()?;
    let operator_lithplus = ILithPlus::new(lithplus_address, operator_client.provider.clone());
    let transfer_amount = U256::from(TRANSFER_AMOUNT);

    assert_reverts(
        send_tx(
            &operator_client,
            operator_lithplus.safeTransferFrom(holder, operator, id, transfer_amount, Bytes::new()),
        ),
        "transfer before approval",
    )
    .await?;

    send_tx(&args.client, lithplus.setApprovalForAll(operator, true)).await?;
    let approved = call_helper(&args.client, lithplus.isApprovedForAll(holder, operator))
        .await?
        ._0;
    ensure!(approved, "operator not approved");

    send_tx(
        &operator_client,
        operator_lithplus.safeTransferFrom(holder, operator, id, transfer_amount, Bytes::new()),
    )
    .await?;

    let balances = call_helper(
        &args.client,
        lithplus.balanceOfBatch(vec![holder, operator], vec![id, id]),
    )
    .await?
    ._0;
    let expected = vec![U256::from(MINT_AMOUNT - TRANSFER_AMOUNT), transfer_amount];
    ensure!(balances == expected, "unexpected balances {balances:?}");

    send_tx(&args.client, lithplus.setApprovalForAll(operator, false)).await?;
    assert_reverts(
        send_tx(
            &operator_client,
            operator_lithplus.safeTransferFrom(holder, operator, id, transfer_amount, Bytes::new()),
        ),
        "transfer after revocation",
    )
    .await
}
integration_test!(test_operator_transfer);

/// Tests transferring a batch of tokens
async fn test_batch_transfer(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let holder = args.client.address()?;
    let recipient = PrivateKeySigner::random().address();
    let ids = vec![U256::ZERO, U256::from(1)];
    send_tx(
        &args.client,
        lithplus.mintBatch(holder, ids.clone(), vec![U256::from(MINT_AMOUNT); ids.len()]),
    )
    .await?;

    let transfer_amounts = vec![U256::from(TRANSFER_AMOUNT), U256::from(MINT_AMOUNT)];
    send_tx(
        &args.client,
        lithplus.safeBatchTransferFrom(
            holder,
            recipient,
            ids.clone(),
            transfer_amounts.clone(),
            Bytes::new(),
        ),
    )
    .await?;

    let balances = call_helper(
        &args.client,
        lithplus.balanceOfBatch(
            vec![holder, holder, recipient, recipient],
            [ids.clone(), ids.clone()].concat(),
        ),
    )
    .await?
    ._0;
    let expected = vec![
        U256::from(MINT_AMOUNT - TRANSFER_AMOUNT),
        U256::ZERO,
        transfer_amounts[0],
        transfer_amounts[1],
    ];
    ensure!(balances == expected, "unexpected balances {balances:?}");

    // The holder has no tokens of the second ID left
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.safeBatchTransferFrom(
                holder,
                recipient,
                ids,
                vec![U256::from(1); 2],
                Bytes::new(),
            ),
        ),
        "overdrawn batch transfer",
    )
    .await
}
integration_test!(test_batch_transfer);

/// Tests transferring ownership, and that only the owner may do so
async fn test_transfer_ownership(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    assert_reverts(
        send_tx(&args.client, lithplus.transferOwnership(Address::ZERO)),
        "ownership transfer to the zero address",
    )
    .await?;

    let new_owner = PrivateKeySigner::random().address();
    send_tx(&args.client, lithplus.transferOwnership(new_owner)).await?;

    let owner = call_helper(&args.client, lithplus.owner()).await?._0;
    ensure!(owner == new_owner, "unexpected owner {owner:#x}");

    // The previous owner has lost its rights
    let holder = args.client.address()?;
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.mint(holder, U256::ZERO, U256::from(MINT_AMOUNT)),
        ),
        "mint by the previous owner",
    )
    .await?;
    assert_reverts(
        send_tx(&args.client, lithplus.transferOwnership(holder)),
        "ownership transfer by the previous owner",
    )
    .await
}
integration_test!(test_transfer_ownership);

/// Tests that renouncing ownership disables the owner-only methods
async fn test_renounce_ownership(args: TestArgs) -> Result<()> {
    let lithplus_address = deploy_lithplus(&args, Some(&test_uri_table())).await?;
    let lithplus = ILithPlus::new(lithplus_address, args.client.provider.clone());

    let reader_lithplus = ILithPlus::new(lithplus_address, args.reader.provider.clone());
    assert_reverts(
        call_helper(&args.reader, reader_lithplus.renounceOwnership()),
        "renunciation by a non-owner",
    )
    .await?;

    send_tx(&args.client, lithplus.renounceOwnership()).await?;
    let owner = call_helper(&args.client, lithplus.owner()).await?._0;
    ensure!(owner == Address::ZERO, "unexpected owner {owner:#x}");

    let holder = args.client.address()?;
    assert_reverts(
        send_tx(
            &args.client,
            lithplus.mint(holder, U256::ZERO, U256::from(MINT_AMOUNT)),
        ),
        "mint after renunciation",
    )
    .await?;
    assert_reverts(
        send_tx(&args.client, lithplus.addUri("sample2.pdf".to_string())),
        "URI addition after renunciation",
    )
    .await
}
integration_test!(test_renounce_ownership);
