use serde::{Deserialize, Serialize};

pub const HELLO_ASM: &str = r#"; Hello, world (NASM, Linux x86_64)
; compile: nasm -f elf64 hello.asm && ld -o hello hello.o

section .data
    msg db "Hello, world!", 10
    len equ $ - msg

section .text
    global _start

_start:
    mov rax, 1         ; sys_write
    mov rdi, 1         ; fd=stdout
    mov rsi, msg       ; buf
    mov rdx, len       ; count
    syscall

    mov rax, 60        ; sys_exit
    xor rdi, rdi       ; status 0
    syscall"#;

pub const MACROS_INC: &str = "; macros here\n%macro print 1\n ; ...\n%endmacro";

pub const NEW_FILE: &str = "; new file";

/// One entry of the explorer. `id` doubles as the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: &str, content: &str) -> Self {
        SourceFile {
            id: name.to_string(),
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    pub fn rename(&mut self, name: &str) {
        self.id = name.to_string();
        self.name = name.to_string();
    }
}

/// Seed files used on first run or when the stored record is unusable.
pub fn default_files() -> Vec<SourceFile> {
    vec![
        SourceFile::new("hello.asm", HELLO_ASM),
        SourceFile::new("macros.inc", MACROS_INC),
    ]
}
