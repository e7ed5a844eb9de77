use crate::capture::input::types::{
    HookDecision, KeyAction, KeyboardPayload, PointerAction, PointerPayload, RawKeyboardEvent,
    RawPointerEvent,
};
use crate::recorder::hook::{HookError, HookResult, InputHook};
use std::cell::RefCell;
use std::sync::Arc;
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, SetWindowsHookExW, TranslateMessage,
    UnhookWindowsHookEx, HHOOK, KBDLLHOOKSTRUCT, MSG, MSLLHOOKSTRUCT, WH_KEYBOARD_LL, WH_MOUSE_LL,
    WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_MOUSEWHEEL,
    WM_RBUTTONDOWN, WM_RBUTTONUP, WM_SYSKEYDOWN, WM_SYSKEYUP,
};

// Hook procedures run on the thread that installed them
thread_local! {
    static ACTIVE_HOOK: RefCell<Option<Arc<dyn InputHook>>> = const { RefCell::new(None) };
}

fn active_hook() -> Option<Arc<dyn InputHook>> {
    ACTIVE_HOOK.with(|hook| hook.borrow().clone())
}

unsafe extern "system" fn keyboard_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 {
        let info = &*(lparam.0 as *const KBDLLHOOKSTRUCT);

        let action = match wparam.0 as u32 {
            WM_KEYDOWN | WM_SYSKEYDOWN => Some(KeyAction::Down),
            WM_KEYUP | WM_SYSKEYUP => Some(KeyAction::Up),
            _ => None,
        };

        if let (Some(action), Some(hook)) = (action, active_hook()) {
            let event = RawKeyboardEvent {
                action,
                payload: KeyboardPayload {
                    vk_code: info.vkCode,
                    scan_code: info.scanCode,
                    flags: info.flags.0,
                    time: info.time,
                },
            };
            if hook.on_keyboard_event(event) == HookDecision::Consume {
                return LRESULT(1);
            }
        }
    }

    CallNextHookEx(HHOOK::default(), code, wparam, lparam)
}

unsafe extern "system" fn mouse_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 {
        let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);

        let action = match wparam.0 as u32 {
            WM_MOUSEMOVE => PointerAction::Move,
            WM_LBUTTONDOWN => PointerAction::LeftDown,
            WM_LBUTTONUP => PointerAction::LeftUp,
            WM_RBUTTONDOWN => PointerAction::RightDown,
            WM_RBUTTONUP => PointerAction::RightUp,
            WM_MOUSEWHEEL => PointerAction::Wheel,
            _ => PointerAction::Other,
        };

        if let Some(hook) = active_hook() {
            let event = RawPointerEvent {
                action,
                payload: PointerPayload {
                    x: info.pt.x,
                    y: info.pt.y,
                    mouse_data: info.mouseData,
                    flags: info.flags,
                    time: info.time,
                },
            };
            if hook.on_pointer_event(event) == HookDecision::Consume {
                return LRESULT(1);
            }
        }
    }

    CallNextHookEx(HHOOK::default(), code, wparam, lparam)
}

/// Install both global hooks on the current thread and pump messages until `WM_QUIT`.
pub fn run_hooks(hook: Arc<dyn InputHook>) -> HookResult<()> {
    ACTIVE_HOOK.with(|slot| *slot.borrow_mut() = Some(hook));

    let result = unsafe { install_and_pump() };

    ACTIVE_HOOK.with(|slot| *slot.borrow_mut() = None);
    result
}

unsafe fn install_and_pump() -> HookResult<()> {
    let keyboard = SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_proc), None, 0)
        .map_err(|e| HookError::KeyboardHook(e.to_string()))?;
    tracing::info!("Keyboard hook installed");

    let mouse = match SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_proc), None, 0) {
        Ok(mouse) => mouse,
        Err(e) => {
            let _ = UnhookWindowsHookEx(keyboard);
            return Err(HookError::MouseHook(e.to_string()));
        }
    };
    tracing::info!("Mouse hook installed");

    let mut msg = MSG::default();
    let result = loop {
        let ret = GetMessageW(&mut msg, None, 0, 0);
        match ret.0 {
            0 => break Ok(()),
            -1 => {
                break Err(HookError::MessageLoop(
                    windows::core::Error::from_win32().to_string(),
                ))
            }
            _ => {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    };

    let _ = UnhookWindowsHookEx(mouse);
    let _ = UnhookWindowsHookEx(keyboard);
    tracing::info!("Input hooks removed");
    result
}
