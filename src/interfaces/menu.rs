use crate::application::engine::ShopEngine;
use crate::domain::account::Role;
use crate::domain::cart::Quantity;
use crate::domain::payment::PaymentMethod;
use crate::domain::product::Product;
use crate::error::{Result, ShopError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// The interactive text menu.
///
/// Generic over its input and output streams so sessions can be scripted in
/// tests. The menu is a thin caller: every rule lives in the engine, and
/// every engine error is printed and the loop continues. Only I/O failures
/// propagate. EOF on the input ends the session cleanly.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs one session: authenticate, then route to the role's menu.
    pub async fn run(&mut self, engine: &ShopEngine) -> Result<()> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(());
        };

        match engine.login(&username, &password).await {
            Ok(session) => {
                writeln!(self.output, "Login successful! Session ID: {}", session.token)?;
                match session.role {
                    Role::Administrator => self.admin_menu(engine, &username).await,
                    Role::Shopper => self.shopper_menu(engine, &username).await,
                }
            }
            Err(ShopError::InvalidCredentials) => {
                writeln!(self.output, "Invalid credentials. Please try again.")?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn shopper_menu(&mut self, engine: &ShopEngine, username: &str) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "User Menu:")?;
            writeln!(self.output, "1. View Catalog")?;
            writeln!(self.output, "2. Add Item to Cart")?;
            writeln!(self.output, "3. Remove Item from Cart")?;
            writeln!(self.output, "4. Clear Cart")?;
            writeln!(self.output, "5. View Cart")?;
            writeln!(self.output, "6. Checkout")?;
            writeln!(self.output, "7. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.render_catalog(engine).await?,
                "2" => {
                    let Some(product_id) = self.prompt("Enter Product ID to add: ")? else {
                        break;
                    };
                    let Some(raw_quantity) = self.prompt_parse::<u32>("Enter quantity: ")? else {
                        break;
                    };
                    let outcome = match Quantity::new(raw_quantity) {
                        Ok(quantity) => engine.add_to_cart(username, &product_id, quantity).await,
                        Err(e) => Err(e),
                    };
                    match outcome {
                        Ok(line) => {
                            writeln!(self.output, "Added {} of {} to cart", line.quantity, line.name)?;
                        }
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "3" => {
                    let Some(product_id) = self.prompt("Enter Product ID to remove: ")? else {
                        break;
                    };
                    match engine.remove_from_cart(username, &product_id).await {
                        Ok(line) => {
                            writeln!(self.output, "Removed {} from cart", line.product_id)?;
                        }
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "4" => {
                    engine.clear_cart(username).await?;
                    writeln!(self.output, "Cart cleared")?;
                }
                "5" => {
                    let lines = engine.list_cart(username).await?;
                    if lines.is_empty() {
                        writeln!(self.output, "Your cart is empty")?;
                    } else {
                        for line in lines {
                            writeln!(
                                self.output,
                                "Product ID: {}, Name: {}, Quantity: {}, Price: {}",
                                line.product_id, line.name, line.quantity, line.unit_price
                            )?;
                        }
                    }
                }
                "6" => {
                    writeln!(self.output, "Payment options: Net Banking, PayPal, UPI")?;
                    let Some(raw) = self.prompt("Choose a payment option: ")? else {
                        break;
                    };
                    let outcome = match raw.parse::<PaymentMethod>() {
                        Ok(method) => engine.checkout(username, method).await,
                        Err(e) => Err(e),
                    };
                    match outcome {
                        Ok(receipt) => writeln!(
                            self.output,
                            "Your order is successfully placed using {} for a total of Rs. {}",
                            receipt.method, receipt.total
                        )?,
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "7" => {
                    engine.logout(username).await?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    async fn admin_menu(&mut self, engine: &ShopEngine, username: &str) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Admin Menu:")?;
            writeln!(self.output, "1. View Catalog")?;
            writeln!(self.output, "2. Add Product")?;
            writeln!(self.output, "3. Remove Product")?;
            writeln!(self.output, "4. Add Category")?;
            writeln!(self.output, "5. Remove Category")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.render_catalog(engine).await?,
                "2" => {
                    let Some(category) = self.prompt("Enter category: ")? else {
                        break;
                    };
                    let Some(product_id) = self.prompt("Enter product ID: ")? else {
                        break;
                    };
                    let Some(name) = self.prompt("Enter product name: ")? else {
                        break;
                    };
                    let Some(stock) = self.prompt_parse::<i64>("Enter product stock: ")? else {
                        break;
                    };
                    let Some(price) = self.prompt_parse::<Decimal>("Enter product price: ")? else {
                        break;
                    };
                    let product = Product::new(product_id, name.clone(), stock, price);
                    match engine.add_product(username, &category, product).await {
                        Ok(()) => {
                            writeln!(self.output, "Product {name} added to {category}")?;
                        }
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "3" => {
                    let Some(category) = self.prompt("Enter category: ")? else {
                        break;
                    };
                    let Some(product_id) = self.prompt("Enter product ID to remove: ")? else {
                        break;
                    };
                    match engine.remove_product(username, &category, &product_id).await {
                        Ok(()) => {
                            writeln!(self.output, "Product {product_id} removed from {category}")?;
                        }
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "4" => {
                    let Some(name) = self.prompt("Enter new category: ")? else {
                        break;
                    };
                    match engine.add_category(username, &name).await {
                        Ok(()) => writeln!(self.output, "Category {name} added")?,
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "5" => {
                    let Some(name) = self.prompt("Enter category to remove: ")? else {
                        break;
                    };
                    match engine.remove_category(username, &name).await {
                        Ok(()) => writeln!(self.output, "Category {name} removed")?,
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
                "6" => {
                    engine.logout(username).await?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    async fn render_catalog(&mut self, engine: &ShopEngine) -> Result<()> {
        for (category, products) in engine.view_catalog().await? {
            writeln!(self.output)?;
            writeln!(self.output, "Category: {category}")?;
            for product in products {
                writeln!(
                    self.output,
                    "Product ID: {}, Name: {}, Stock: {}, Price: {}",
                    product.product_id, product.name, product.stock, product.price
                )?;
            }
        }
        Ok(())
    }

    /// Prints `text`, reads one trimmed line. `None` means EOF.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until the input parses, re-prompting on malformed numbers
    /// instead of aborting the session. `None` means EOF.
    fn prompt_parse<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        loop {
            let Some(raw) = self.prompt(text)? else {
                return Ok(None);
            };
            match raw.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}
