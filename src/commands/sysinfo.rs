//! Canned output for the status commands. Nothing here inspects the host.

use crate::command::{Command, CommandResult};
use crate::context::TerminalContext;
use chrono::Local;

pub struct PsCommand;
pub struct TopCommand;
pub struct DfCommand;
pub struct FreeCommand;
pub struct WhoamiCommand;

const PS_OUTPUT: &str = "  PID TTY          TIME CMD
    1 ?        00:00:01 systemd
  943 ?        00:00:00 sshd
 1020 pts/0    00:00:00 bash
 1255 pts/0    00:00:00 ps";

const TOP_BODY: &str = "Tasks: 128 total,   1 running, 127 sleeping
%Cpu(s):  2.4 us,  1.2 sy,  0.0 ni, 96.3 id
MiB Mem :  16384.0 total,   8192.0 free,   4096.0 used
MiB Swap:   8192.0 total,   8192.0 free,      0.0 used

  PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     TIME+ COMMAND
 1255 user      20   0   10256   3756   3144 R   0.3   0.1   0:00.01 top
    1 root      20   0  169992  11784   8376 S   0.0   0.1   0:02.34 systemd
  943 root      20   0   12672   6940   6044 S   0.0   0.0   0:00.00 sshd";

const DF_OUTPUT: &str = "Filesystem     1K-blocks      Used Available Use% Mounted on
/dev/sda1      41251136  12648444  26531788  33% /
tmpfs           8192000         0   8192000   0% /tmp
/dev/sdb1     120034544  82544248  31388040  73% /data";

const FREE_OUTPUT: &str = "               total        used        free      shared  buff/cache   available
Mem:        16384000     4521432     8631244      427128     3231324    11058512
Swap:        8192000      124568     8067432";

impl Command for PsCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(PS_OUTPUT.to_string())
    }
}

impl Command for TopCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        let now = Local::now().format("%I:%M:%S %p");
        Ok(format!("top - {}\n{}", now, TOP_BODY))
    }
}

impl Command for DfCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(DF_OUTPUT.to_string())
    }
}

impl Command for FreeCommand {
    fn execute(&self, _args: &[String], _ctx: &mut TerminalContext) -> CommandResult {
        Ok(FREE_OUTPUT.to_string())
    }
}

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], ctx: &mut TerminalContext) -> CommandResult {
        Ok(ctx.config.user.clone())
    }
}
