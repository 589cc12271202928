use asm::{assemble, measure, Diagnostic};

const HELLO: &str = "; Hello, world (NASM, Linux x86_64)
section .data
    msg db \"Hello, world!\", 10

section .text
    global _start

_start:
    mov rax, 1         ; sys_write
    mov rdi, 1         ; fd=stdout
    syscall

    mov rax, 60        ; sys_exit
    xor rdi, rdi       ; status 0
    syscall";

/// Source lines that are neither blank nor labels.
fn counted_lines(code: &str) -> u32 {
    code.lines()
        .map(|l| l.split(';').next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .filter(|l| {
            let head = l.split(':').next().unwrap_or("");
            !(l.contains(':')
                && head.chars().next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
                && head.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
        })
        .count() as u32
}

fn check(code: &str) {
    println!("{}", code);
    let first = assemble(code);
    for diag in &first.diagnostics {
        println!("{}", diag);
    }
    println!("{}", first.listing);

    assert_eq!(first.byte_count, 4 * counted_lines(code));
    assert_eq!(first.byte_count, measure(code));
    assert_eq!(first, assemble(code));
    assert_eq!(
        first.diagnostics.len() + first.entries.len(),
        counted_lines(code) as usize
    );
}

macro_rules! case {
    ($name:ident, $code:expr) => {
        #[test]
        fn $name() {
            check($code);
        }
    };
}

case!(blank, "");
case!(only_comments, "; a\n;b\n   ; c");
case!(only_labels, "main:\n_loop:\nend_1:");
case!(single, "mov rax, 1");
case!(mixed_case, "MOV rax, 1\nXor rdi, rdi\nSysCall");
case!(unknown, "nop\nret\nint 0x80");
case!(label_and_code, "loop: jmp loop\nadd rax, 1");
case!(hello, HELLO);
case!(macro_stub, "; macros here\n%macro print 1\n ; ...\n%endmacro");

#[test]
fn label_line_keeps_address() {
    let asm = assemble("mov rax, 1\nfoo bar\nhello: \nsyscall");
    assert_eq!(
        asm.diagnostics,
        vec![Diagnostic::new(2, "Unknown instruction: \"foo\"")]
    );
    assert_eq!(asm.listing, "0000: mov rax, 1\n0008: syscall");
    assert_eq!(asm.byte_count, 12);
}

#[test]
fn recognized_mnemonics_never_diagnose() {
    for m in ["mov", "xor", "syscall", "jmp", "add", "sub", "push", "pop"] {
        for name in [m.to_string(), m.to_uppercase()] {
            let asm = assemble(&format!("{} x", name));
            assert!(asm.is_ok(), "{} reported {:?}", name, asm.diagnostics);
            assert_eq!(asm.listing, format!("0000: {} x", name));
        }
    }
}

#[test]
fn non_ascii_after_mnemonic() {
    let asm = assemble("mové rax, 1");
    assert!(asm.is_ok(), "{:?}", asm.diagnostics);
    assert_eq!(asm.listing, "0000: mové rax, 1");
}

#[test]
fn byte_order_mark() {
    let asm = assemble("\u{feff}mov rax, 1\r\n\u{feff}\r\nsyscall");
    assert!(asm.is_ok(), "{:?}", asm.diagnostics);
    assert_eq!(asm.listing, "0000: mov rax, 1\n0004: syscall");
    assert_eq!(asm.byte_count, 8);
}

#[test]
fn unknown_names_first_token() {
    let asm = assemble("  lea rax, [rip]   ; load");
    assert_eq!(
        asm.diagnostics,
        vec![Diagnostic::new(1, "Unknown instruction: \"lea\"")]
    );
    assert_eq!(asm.listing, "");
    assert_eq!(asm.byte_count, 4);
}

#[test]
fn line_numbers_count_blank_and_label_lines() {
    let asm = assemble("\n\nstart:\n; note\nbogus\n");
    assert_eq!(asm.diagnostics.len(), 1);
    assert_eq!(asm.diagnostics[0].line, 5);
}

#[test]
fn hello_sample_listing() {
    let asm = assemble(HELLO);
    let lines: Vec<usize> = asm.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3, 5, 6]);
    assert_eq!(
        asm.listing,
        "0010: mov rax, 1\n0014: mov rdi, 1\n0018: syscall\n\
         001c: mov rax, 60\n0020: xor rdi, rdi\n0024: syscall"
    );
    assert_eq!(asm.byte_count, 40);
}
