// template.rs - Fixed C text of the generated test program.
//
// The program is a flat list of x2/x3/n calls between a prologue and a
// trailer. Literals are UTF-16 with an explicit two-byte NUL terminator, so
// lengths come from onigenc_str_bytelen_null() rather than strlen().

use crate::encodings::Endianness;

pub const PROLOGUE: &str = r#"/*
 * This program was generated by testconvu.
 */
#include<stdio.h>

#ifdef POSIX_TEST
#include "onigposix.h"
#else
#include "oniguruma.h"
#endif

static int nsucc  = 0;
static int nfail  = 0;
static int nerror = 0;

static FILE* err_file;

#ifndef POSIX_TEST
static OnigRegion* region;
static OnigEncoding ENC;
#endif

#define ulen(p) onigenc_str_bytelen_null(ENC, (UChar* )p)

/* Renders a UTF-16 string back to ASCII for messages. */
static void uconv(char* from, char* to, int len)
{
  int i;
  unsigned char c;
  char *q;

  q = to;

  for (i = 0; i < len; i += 2) {
    c = (unsigned char )from[i];
    if (c == 0) {
      c = (unsigned char )from[i+1];
      if (c < 0x20 || c >= 0x7f || c == 0x5c || c == 0x22) {
        sprintf(q, "\\%03o", c);
        q += 4;
      }
      else {
        sprintf(q, "%c", c);
        q++;
      }
    }
    else {
      sprintf(q, "\\%03o", c);
      q += 4;
      c = (unsigned char )from[i+1];
      sprintf(q, "\\%03o", c);
      q += 4;
    }
  }

  *q = 0;
}

static void report(int ok, int not, char* cpat, char* cstr)
{
  if (ok) {
    fprintf(stdout, "OK%s: /%s/ '%s'\n", (not ? "(N)" : ""), cpat, cstr);
    nsucc++;
  }
  else {
    fprintf(stdout, "FAIL%s: /%s/ '%s'\n", (not ? "(N)" : ""), cpat, cstr);
    nfail++;
  }
}

static void report_span(int from, int to, int beg, int end, char* cpat, char* cstr)
{
  if (beg == from && end == to) {
    fprintf(stdout, "OK: /%s/ '%s'\n", cpat, cstr);
    nsucc++;
  }
  else {
    fprintf(stdout, "FAIL: /%s/ '%s' %d-%d : %d-%d\n", cpat, cstr,
            from, to, beg, end);
    nfail++;
  }
}

static void xx(char* pattern, char* str, int from, int to, int mem, int not)
{
  int r;
  char cpat[4000], cstr[4000];

#ifdef POSIX_TEST
  regex_t reg;
  char buf[200];
  regmatch_t pmatch[20];

  uconv(pattern, cpat, ulen(pattern));
  uconv(str,     cstr, ulen(str));

  r = regcomp(&reg, pattern, REG_EXTENDED | REG_NEWLINE);
  if (r) {
    regerror(r, &reg, buf, sizeof(buf));
    fprintf(err_file, "ERROR: %s\n", buf);
    nerror++;
    return ;
  }

  r = regexec(&reg, str, reg.re_nsub + 1, pmatch, 0);
  if (r != 0 && r != REG_NOMATCH) {
    regerror(r, &reg, buf, sizeof(buf));
    fprintf(err_file, "ERROR: %s\n", buf);
    nerror++;
    regfree(&reg);
    return ;
  }

  if (r == REG_NOMATCH)
    report(not, not, cpat, cstr);
  else if (not)
    report(0, not, cpat, cstr);
  else
    report_span(from, to, pmatch[mem].rm_so, pmatch[mem].rm_eo, cpat, cstr);

  regfree(&reg);

#else
  regex_t* reg;
  OnigCompileInfo ci;
  OnigErrorInfo einfo;
  OnigSyntaxType syn = *ONIG_SYNTAX_DEFAULT;

  uconv(pattern, cpat, ulen(pattern));
  uconv(str,     cstr, ulen(str));

  ci.num_of_elements = 5;
  ci.pattern_enc = ENC;
  ci.target_enc  = ENC;
  ci.syntax      = &syn;
  ci.option      = ONIG_OPTION_DEFAULT;
  ci.case_fold_flag = ONIGENC_CASE_FOLD_DEFAULT;

  r = onig_new_deluxe(&reg, (UChar* )pattern,
          (UChar* )(pattern + ulen(pattern)),
          &ci, &einfo);
  if (r) {
    char s[ONIG_MAX_ERROR_MESSAGE_LEN];
    onig_error_code_to_str((UChar* )s, r, &einfo);
    fprintf(err_file, "ERROR: %s\n", s);
    nerror++;
    return ;
  }

  r = onig_search(reg, (UChar* )str, (UChar* )(str + ulen(str)),
                  (UChar* )str, (UChar* )(str + ulen(str)),
                  region, ONIG_OPTION_NONE);
  if (r < ONIG_MISMATCH) {
    char s[ONIG_MAX_ERROR_MESSAGE_LEN];
    onig_error_code_to_str((UChar* )s, r);
    fprintf(err_file, "ERROR: %s\n", s);
    nerror++;
    onig_free(reg);
    return ;
  }

  if (r == ONIG_MISMATCH)
    report(not, not, cpat, cstr);
  else if (not)
    report(0, not, cpat, cstr);
  else
    report_span(from, to, region->beg[mem], region->end[mem], cpat, cstr);

  onig_free(reg);
#endif
}

static void x2(char* pattern, char* str, int from, int to)
{
  xx(pattern, str, from, to, 0, 0);
}

static void x3(char* pattern, char* str, int from, int to, int mem)
{
  xx(pattern, str, from, to, mem, 0);
}

static void n(char* pattern, char* str)
{
  xx(pattern, str, 0, 0, 0, 1);
}

extern int main(int argc, char* argv[])
{
  err_file = stdout;

#ifndef POSIX_TEST
  region = onig_region_new();
#endif
"#;

pub const TRAILER: &str = r#"  fprintf(stdout,
       "\nRESULT   SUCC: %d,  FAIL: %d,  ERROR: %d      (by Oniguruma %s)\n",
       nsucc, nfail, nerror, onig_version());

#ifndef POSIX_TEST
  onig_region_free(region, 1);
  onig_end();
#endif

  return ((nfail == 0 && nerror == 0) ? 0 : -1);
}
"#;

/// Selects the engine encoding for the calls that follow.
pub fn section_header(endian: Endianness) -> String {
    let se = endian.suffix();
    format!(
        "#ifdef POSIX_TEST\n  reg_set_encoding(REG_POSIX_ENCODING_UTF16_{se});\n#else\n  ENC = ONIG_ENCODING_UTF16_{se};\n#endif\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_header_names_encoding() {
        let be = section_header(Endianness::Big);
        assert!(be.contains("REG_POSIX_ENCODING_UTF16_BE"));
        assert!(be.contains("ENC = ONIG_ENCODING_UTF16_BE;"));
        assert!(section_header(Endianness::Little).contains("ONIG_ENCODING_UTF16_LE"));
    }

    #[test]
    fn prologue_declares_counters_and_helpers() {
        for needle in [
            "static int nsucc",
            "static int nfail",
            "static int nerror",
            "static void x2(",
            "static void x3(",
            "static void n(",
        ] {
            assert!(PROLOGUE.contains(needle), "{needle}");
        }
        assert!(PROLOGUE.trim_end().ends_with("#endif"));
    }

    #[test]
    fn trailer_returns_status() {
        assert!(TRAILER.contains("(nfail == 0 && nerror == 0) ? 0 : -1"));
    }
}
