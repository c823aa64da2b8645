use super::*;

pub(super) fn handle_company_command(console: &Console, command: CompanyCommands) -> Result<()> {
    console.require_login()?;
    let client: RemoteClient = console.client()?;

    match command {
        CompanyCommands::Create { name, address } => {
            let company = client.create_company(&name, address.as_deref())?;
            println!("Created company {}", company.name);
        }
        CompanyCommands::List { json } => {
            let list = client.companies()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&list).context("serialize company list json")?
                );
            } else if list.is_empty() {
                println!("No companies");
            } else {
                for c in list {
                    match c.address {
                        Some(addr) if !addr.is_empty() => println!("{} ({})", c.name, addr),
                        _ => println!("{}", c.name),
                    }
                }
            }
        }
    }
    Ok(())
}

pub(super) fn handle_config_command(console: &Console, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = &console.config;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(cfg).context("serialize config json")?
                );
            } else {
                println!("dir: {}", console.store.root().display());
                println!("base_url: {}", cfg.base_url);
                println!("page_size: {}", cfg.page_size);
                println!("timeout_secs: {}", cfg.timeout_secs);
                println!(
                    "user: {}",
                    console
                        .session
                        .username()
                        .unwrap_or_else(|| "(not logged in)".to_string())
                );
            }
        }
        ConfigCommands::Set {
            url,
            page_size,
            timeout_secs,
        } => {
            // Re-read so a one-off --base-url never gets persisted.
            let mut cfg = console.store.read_config()?;
            if let Some(url) = url {
                cfg.base_url = url;
            }
            if let Some(size) = page_size {
                if size == 0 {
                    anyhow::bail!("page size must be at least 1");
                }
                cfg.page_size = size;
            }
            if let Some(secs) = timeout_secs {
                cfg.timeout_secs = secs;
            }
            console.store.write_config(&cfg)?;
            println!("Config saved");
        }
    }
    Ok(())
}
