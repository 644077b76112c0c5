/// 卡片字段公共验证函数模块
/// 提供正反面文本验证，供卡组操作与导入归一化共用。

/// 验证卡片正面文本：去除首尾空白后非空，最长 512 字符
pub fn validate_prompt(text: &str) -> Result<(), &'static str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("卡片正面不能为空");
    }
    if trimmed.chars().count() > 512 {
        return Err("卡片正面不能超过512个字符");
    }
    Ok(())
}

/// 验证卡片背面文本：去除首尾空白后非空，最长 2048 字符
pub fn validate_answer(text: &str) -> Result<(), &'static str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("卡片背面不能为空");
    }
    if trimmed.chars().count() > 2048 {
        return Err("卡片背面不能超过2048个字符");
    }
    Ok(())
}
