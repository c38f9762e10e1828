use assert_cmd::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn shopcart() -> Command {
    let mut cmd = Command::new(cargo_bin!("shopcart"));
    cmd.arg("tests/fixtures/users.json")
        .arg("tests/fixtures/product_catalog.json");
    cmd
}

#[test]
fn test_shopper_end_to_end() {
    shopcart()
        .write_stdin("alice\nwonderland\n1\n2\np1\n2\n5\n6\nUPI\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"))
        .stdout(predicate::str::contains("Category: Books"))
        .stdout(predicate::str::contains("Category: Electronics"))
        .stdout(predicate::str::contains("Added 2 of Laptop to cart"))
        .stdout(predicate::str::contains(
            "Product ID: p1, Name: Laptop, Quantity: 2, Price: 500",
        ))
        .stdout(predicate::str::contains(
            "Your order is successfully placed using UPI for a total of Rs. 1000",
        ));
}

#[test]
fn test_out_of_stock_is_reported_and_loop_continues() {
    shopcart()
        .write_stdin("alice\nwonderland\n2\np2\n1\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Phone is out of stock"))
        .stdout(predicate::str::contains("Your cart is empty"));
}

#[test]
fn test_invalid_payment_option_keeps_the_cart() {
    shopcart()
        .write_stdin("alice\nwonderland\n2\np1\n2\n6\nBitcoin\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid payment option: Bitcoin"))
        .stdout(predicate::str::contains(
            "Product ID: p1, Name: Laptop, Quantity: 2, Price: 500",
        ));
}

#[test]
fn test_admin_end_to_end() {
    shopcart()
        .write_stdin(
            "bob\nbuilder\n4\nToys\n4\nToys\n2\nToys\nt1\nKite\n5\n9.99\n3\nToys\nt1\n5\nToys\n6\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin Menu:"))
        .stdout(predicate::str::contains("Category Toys added"))
        .stdout(predicate::str::contains("Category Toys already exists"))
        .stdout(predicate::str::contains("Product Kite added to Toys"))
        .stdout(predicate::str::contains("Product t1 removed from Toys"))
        .stdout(predicate::str::contains("Category Toys removed"));
}

#[test]
fn test_invalid_credentials() {
    shopcart()
        .write_stdin("alice\nnot-her-password\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid credentials. Please try again.",
        ))
        .stdout(predicate::str::contains("User Menu:").not());
}

#[test]
fn test_malformed_quantity_reprompts() {
    shopcart()
        .write_stdin("alice\nwonderland\n2\np1\nlots\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a number."))
        .stdout(predicate::str::contains("Added 2 of Laptop to cart"));
}

#[test]
fn test_malformed_users_file_fails_at_startup() {
    let mut users = tempfile::NamedTempFile::new().unwrap();
    write!(users, r#"{{ "alice": {{ "is_admin": true }} }}"#).unwrap();

    let mut cmd = Command::new(cargo_bin!("shopcart"));
    cmd.arg(users.path()).arg("tests/fixtures/product_catalog.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("password"));
}
