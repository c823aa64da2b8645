use super::*;

pub(super) fn handle_login_command(
    console: &Console,
    username: String,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_secret("Password")?,
    };
    let client = console.client()?;
    let session = client.login(&username, &password)?;
    let who = session.username.clone();
    console.session.set(session).context("save session")?;
    println!("Logged in as {}", who);
    Ok(())
}

pub(super) fn handle_register_command(
    console: &Console,
    username: String,
    email: String,
) -> Result<()> {
    let password = prompt_secret("Password")?;
    let again = prompt_secret("Confirm password")?;
    let client = console.client()?;
    let session = client.register(&username, &email, &password, &again)?;
    let who = session.username.clone();
    console.session.set(session).context("save session")?;
    println!("Registered and logged in as {}", who);
    Ok(())
}

pub(super) fn handle_logout_command(console: &Console) -> Result<()> {
    match console.session.username() {
        Some(who) => {
            console.session.clear().context("clear session")?;
            println!("Logged out {}", who);
        }
        None => println!("Not logged in"),
    }
    Ok(())
}

pub(super) fn handle_whoami_command(console: &Console, json: bool) -> Result<()> {
    console.require_login()?;
    let client = console.client()?;
    let info = client.user_info()?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info).context("serialize profile json")?
        );
    } else {
        println!("user: {}", info.username);
        println!("name: {}", info.display_name());
        if !info.email.is_empty() {
            println!("email: {}", info.email);
        }
        println!("server: {}", client.endpoints().base_url);
    }
    Ok(())
}

pub(super) fn handle_change_password_command(console: &Console) -> Result<()> {
    console.require_login()?;
    let old = prompt_secret("Current password")?;
    let new = prompt_secret("New password")?;
    let again = prompt_secret("Confirm new password")?;
    if new != again {
        anyhow::bail!("new passwords do not match");
    }
    console.client()?.change_password(&old, &new)?;
    println!("Password changed");
    Ok(())
}
