//! Login, logout, and identity commands.

use clap::Args;

use super::AppContext;

#[derive(Args)]
pub struct LoginArgs {
    /// Email address to log in with
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

pub async fn login(ctx: &mut AppContext, args: LoginArgs) -> anyhow::Result<()> {
    let user = ctx
        .session
        .login(&ctx.client, &args.email, &args.password)
        .await?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

pub async fn logout(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.logout().await?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> anyhow::Result<()> {
    let user = ctx.current_user()?;
    println!("{} <{}> (id {})", user.name, user.email, user.id);
    Ok(())
}
