//! Native `.lnk` codec via the shell COM API.
//!
//! Uses `IShellLinkW` + `IPersistFile`, the same objects Explorer uses
//! when it creates a shortcut. No child process is spawned and no text
//! output is parsed, which removes the startup latency and quoting
//! hazards of the PowerShell route.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::Win32::Foundation::BOOL;
use windows::Win32::System::Com::{
    CLSCTX_INPROC_SERVER, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx,
    CoUninitialize, IPersistFile, STGM_READ,
};
use windows::Win32::UI::Shell::{IShellLinkW, ShellLink};
use windows::core::{Interface, PCWSTR};

use avvio_core::{Error, Result, ShortcutCodec, ShortcutInfo, log_debug};

/// Ensures COM is initialized on the calling thread.
struct ComInit;

impl ComInit {
    fn new() -> Self {
        // SAFETY: CoInitializeEx is safe to call; duplicate calls on the
        // same thread return S_FALSE and are harmless.
        unsafe {
            let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);
        }
        Self
    }
}

impl Drop for ComInit {
    fn drop(&mut self) {
        unsafe {
            CoUninitialize();
        }
    }
}

thread_local! {
    static COM_INIT: ComInit = ComInit::new();
}

/// Reads and writes shortcut files through the ShellLink coclass.
pub struct NativeCodec;

impl ShortcutCodec for NativeCodec {
    fn encode(
        &self,
        location: &Path,
        target: &Path,
        arguments: &str,
        description: &str,
    ) -> Result<()> {
        COM_INIT.with(|_| {
            let link: IShellLinkW =
                unsafe { CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER) }
                    .map_err(com_err)?;

            let target_w = wide_os(target.as_os_str());
            let workdir_w = wide_os(target.parent().unwrap_or(Path::new("")).as_os_str());
            let args_w = wide_str(arguments);
            let desc_w = wide_str(description);

            // SAFETY: the wide buffers are NUL-terminated and outlive the
            // calls; IShellLinkW copies the strings internally.
            unsafe {
                link.SetPath(PCWSTR(target_w.as_ptr())).map_err(com_err)?;
                link.SetArguments(PCWSTR(args_w.as_ptr())).map_err(com_err)?;
                link.SetWorkingDirectory(PCWSTR(workdir_w.as_ptr()))
                    .map_err(com_err)?;
                link.SetDescription(PCWSTR(desc_w.as_ptr())).map_err(com_err)?;
            }

            let file: IPersistFile = link.cast().map_err(com_err)?;
            let location_w = wide_os(location.as_os_str());
            // SAFETY: Save takes a NUL-terminated path; TRUE marks the
            // file as the link's current storage.
            unsafe { file.Save(PCWSTR(location_w.as_ptr()), BOOL::from(true)) }
                .map_err(com_err)?;

            log_debug!("wrote shortcut {}", location.display());
            Ok(())
        })
    }

    fn decode(&self, location: &Path) -> Option<ShortcutInfo> {
        // IPersistFile::Load on a missing file would fail anyway, but
        // checking first keeps the common case quiet.
        if !location.is_file() {
            return None;
        }

        COM_INIT.with(|_| {
            let link: IShellLinkW =
                unsafe { CoCreateInstance(&ShellLink, None, CLSCTX_INPROC_SERVER) }.ok()?;
            let file: IPersistFile = link.cast().ok()?;

            let location_w = wide_os(location.as_os_str());
            // SAFETY: Load parses the .lnk file; STGM_READ keeps it read-only.
            unsafe { file.Load(PCWSTR(location_w.as_ptr()), STGM_READ) }.ok()?;

            // SAFETY: each getter fills the buffer up to its length and
            // NUL-terminates; absent fields yield an empty string.
            let mut buf = [0u16; 1024];
            unsafe { link.GetPath(&mut buf, std::ptr::null_mut(), 0) }.ok()?;
            let target_path = from_wide(&buf);

            let arguments = unsafe { link.GetArguments(&mut buf) }
                .ok()
                .map(|()| from_wide(&buf))
                .unwrap_or_default();

            let description = unsafe { link.GetDescription(&mut buf) }
                .ok()
                .map(|()| from_wide(&buf))
                .unwrap_or_default();

            Some(ShortcutInfo {
                target_path,
                arguments,
                description,
            })
        })
    }
}

fn com_err(e: windows::core::Error) -> Error {
    Error::ExternalTool(format!("shell COM call failed: {e}"))
}

/// NUL-terminated UTF-16 from an OS string.
fn wide_os(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}

/// NUL-terminated UTF-16 from a Rust string.
fn wide_str(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// UTF-8 string from a NUL-terminated UTF-16 buffer.
fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}
